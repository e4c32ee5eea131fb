//! Binding a props value to one native shape instance.
//!
//! Each render compares the new props against what was last pushed and
//! issues the minimal sequence of native calls. Per commit the order is:
//!
//! 1. attach to the map (detaching from a previous map first)
//! 2. creation callback, if its identity changed
//! 3. position, geometry, z-index, style options
//! 4. event subscriptions
//!
//! Unmounting detaches the instance and removes every listener.

use crate::context::MapContext;
use crate::coords::{Coordinate, Memo};
use crate::effect::SetEffect;
use crate::error::{BindingError, BindingResult};
use crate::event::{CreateCallback, EventBinder, ShapeEvent};
use crate::lifecycle::Lifecycle;
use crate::native::NativeShape;
use crate::shapes::{CommonProps, ShapeOptions};

type LatLngOf<P> = <<P as ShapeProps>::Native as NativeShape>::LatLng;
type MapOf<P> = <<P as ShapeProps>::Native as NativeShape>::Map;

/// Props of one kind of shape.
pub trait ShapeProps {
    /// The native object these props drive.
    type Native: NativeShape;
    /// Shape-specific geometry pushed through its own setter (radii, ...).
    type Geometry: PartialEq + Clone;

    /// Component name used in error messages.
    const NAME: &'static str;

    /// Props shared by every shape.
    fn common(&self) -> &CommonProps<Self::Native>;

    /// Current geometry value.
    fn geometry(&self) -> Self::Geometry;

    /// Build the native instance from the initial props.
    fn construct(&self, center: LatLngOf<Self>) -> Self::Native;

    /// Push a changed geometry to the native instance.
    fn apply_geometry(native: &Self::Native, geometry: &Self::Geometry);
}

/// A live binding between props of type `P` and a native shape.
///
/// The native instance is created once in [`ShapeBinding::mount`] and kept
/// for the binding's whole life. Dropping the binding unmounts it.
pub struct ShapeBinding<P: ShapeProps> {
    instance: P::Native,
    state: Lifecycle,
    map: Option<MapOf<P>>,
    center: Memo<Coordinate, LatLngOf<P>>,
    position: SetEffect<Coordinate>,
    geometry: SetEffect<P::Geometry>,
    z_index: SetEffect<Option<i32>>,
    options: SetEffect<ShapeOptions>,
    on_create: Option<CreateCallback<P::Native>>,
    binders: Vec<EventBinder<P::Native>>,
}

impl<P: ShapeProps> ShapeBinding<P> {
    /// First render: construct the instance, attach it, and run every effect.
    ///
    /// Fails with `ContextMissing` before anything is constructed when `ctx`
    /// holds no map.
    pub fn mount(props: &P, ctx: &MapContext<MapOf<P>>) -> BindingResult<Self> {
        let map = ctx.require(P::NAME)?.clone();

        let mut state = Lifecycle::default();
        let mut center = Memo::new();
        let lat_lng = center
            .get_or_compute(&props.common().center, |c| <P::Native as NativeShape>::lat_lng(*c))
            .clone();
        let instance = props.construct(lat_lng);
        state.advance(Lifecycle::Constructed)?;
        log::debug!("{} constructed", P::NAME);

        let mut binding = Self {
            instance,
            state,
            map: None,
            center,
            position: SetEffect::new(),
            geometry: SetEffect::new(),
            z_index: SetEffect::new(),
            options: SetEffect::new(),
            on_create: None,
            binders: ShapeEvent::ALL.into_iter().map(EventBinder::new).collect(),
        };
        binding.commit(props, map)?;
        Ok(binding)
    }

    /// Re-render with new props and the current map context.
    pub fn update(&mut self, props: &P, ctx: &MapContext<MapOf<P>>) -> BindingResult<()> {
        if self.state.is_detached() {
            return Err(BindingError::Detached { component: P::NAME });
        }
        let map = ctx.require(P::NAME)?.clone();
        self.commit(props, map)
    }

    /// Run every cleanup: take the instance off its map and drop all
    /// listeners. Calling it again does nothing.
    pub fn unmount(&mut self) {
        if self.state.is_detached() {
            return;
        }
        if self.map.take().is_some() {
            self.instance.set_map(None);
        }
        for binder in &mut self.binders {
            binder.unbind(&self.instance);
        }
        self.state = Lifecycle::Detached;
        log::debug!("{} unmounted", P::NAME);
    }

    /// The native instance. Its identity never changes.
    pub fn instance(&self) -> &P::Native {
        &self.instance
    }

    /// Current lifecycle state.
    pub fn state(&self) -> Lifecycle {
        self.state
    }

    /// The map the instance is attached to.
    pub fn map(&self) -> Option<&MapOf<P>> {
        self.map.as_ref()
    }

    fn commit(&mut self, props: &P, map: MapOf<P>) -> BindingResult<()> {
        self.attach(map)?;
        self.notify_created(props.common().on_create.as_ref());
        self.sync(props);
        self.bind_events(props);
        Ok(())
    }

    fn attach(&mut self, map: MapOf<P>) -> BindingResult<()> {
        if self.map.as_ref() == Some(&map) {
            return Ok(());
        }
        if self.map.take().is_some() {
            self.instance.set_map(None);
            log::debug!("{} detached from previous map", P::NAME);
        }
        self.state.advance(Lifecycle::Attached)?;
        self.instance.set_map(Some(&map));
        self.map = Some(map);
        log::debug!("{} attached", P::NAME);
        Ok(())
    }

    fn notify_created(&mut self, callback: Option<&CreateCallback<P::Native>>) {
        if self.on_create.as_ref() == callback {
            return;
        }
        self.on_create = callback.cloned();
        if let Some(callback) = callback {
            callback.emit(&self.instance);
        }
    }

    fn sync(&mut self, props: &P) {
        let common = props.common();
        let instance = &self.instance;

        let lat_lng = self
            .center
            .get_or_compute(&common.center, |c| <P::Native as NativeShape>::lat_lng(*c));
        if self.position.apply(&common.center, |_| instance.set_position(lat_lng)) {
            log::trace!("{} position -> {:?}", P::NAME, common.center);
        }

        if self
            .geometry
            .apply(&props.geometry(), |geometry| P::apply_geometry(instance, geometry))
        {
            log::trace!("{} geometry updated", P::NAME);
        }

        if self
            .z_index
            .apply_present(&common.z_index, |z| instance.set_z_index(*z))
        {
            log::trace!("{} z-index -> {:?}", P::NAME, common.z_index);
        }

        if self
            .options
            .apply(&common.options, |options| instance.set_options(options))
        {
            log::trace!("{} options updated", P::NAME);
        }
    }

    fn bind_events(&mut self, props: &P) {
        let events = &props.common().events;
        for binder in &mut self.binders {
            binder.bind(&self.instance, events.get(binder.event()));
        }
    }
}

impl<P: ShapeProps> Drop for ShapeBinding<P> {
    fn drop(&mut self) {
        if !self.state.is_detached() {
            log::warn!("{} dropped while mounted, unmounting", P::NAME);
            self.unmount();
        }
    }
}

impl<P: ShapeProps> std::fmt::Debug for ShapeBinding<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapeBinding")
            .field("component", &P::NAME)
            .field("state", &self.state)
            .field("attached", &self.map.is_some())
            .finish()
    }
}
