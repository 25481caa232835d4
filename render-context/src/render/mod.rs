//! The host renderer and the component contract it dispatches on.
//!
//! Components declare what they are through [`ComponentKind`] and what they
//! produce through [`RenderUnit`]; the renderer never inspects concrete
//! types.
//!
//! [`ComponentKind`]: crate::core::ComponentKind
//! [`RenderUnit`]: crate::core::RenderUnit

mod component;
mod renderer;

pub use component::{Component, Element, FnComponent, ProviderComponent};
pub use renderer::Renderer;
