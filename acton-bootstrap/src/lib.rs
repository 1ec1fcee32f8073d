//! acton-bootstrap: Bootstrap 5 form field rendering for acton-htmx applications
//!
//! Turns field metadata supplied by the host application into the exact
//! markup Bootstrap 5 expects, without a template engine in between.
//!
//! # Design Principles
//!
//! 1. **Pure Rendering**: the same field, choices and options always give the same string
//! 2. **Structure by Construction**: markup is built as a tree, then serialized
//! 3. **Layout Is Structure Only**: layouts change wrappers, never per-choice markup
//! 4. **Reject Early**: bad layout names fail when parsed, not when rendered
//!
//! # Quick Start
//!
//! ```rust
//! use acton_bootstrap::prelude::*;
//!
//! let field = FieldDescriptor::new("test").required();
//! let choices = [Choice::new("1", "one"), Choice::new("2", "two")];
//!
//! let layout: LayoutMode = "horizontal".parse()?;
//! let html = FieldRenderer::default().render(&field, &choices, layout);
//!
//! assert!(html.contains(r#"<label class="col-sm-2 col-form-label">Test</label>"#));
//! # Ok::<(), BootstrapError>(())
//! ```

pub mod config;
pub mod error;
pub mod forms;
pub mod markup;
pub mod observability;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use acton_bootstrap::prelude::*;
    //! ```

    pub use crate::config::{BootstrapConfig, BootstrapSettings};
    pub use crate::error::BootstrapError;
    pub use crate::forms::{
        disabled_values, Choice, ChoiceWidget, FieldDescriptor, FieldError, FieldRenderer,
        LayoutMode, RenderOptions, ValidationErrors,
    };
    pub use crate::markup::{merge_attrs, AttrValue, AttributeSet, Element, Node};
}
