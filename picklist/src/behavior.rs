//! Overridable widget steps.
//!
//! A [`Behavior`] supplies the four steps an integrator may customize:
//! mounting, option-row rendering, output rendering and filtering. Every
//! method has a default, so an implementation only overrides what it needs.
//!
//! ```ignore
//! struct ShoutingRows;
//!
//! impl Behavior for ShoutingRows {
//!     fn render_options(&self, registry: &OptionRegistry, cx: &RenderContext<'_>) -> Vec<RenderedRow> {
//!         render::option_rows(registry, cx)
//!             .into_iter()
//!             .map(|row| RenderedRow { markup: row.markup.to_uppercase(), ..row })
//!             .collect()
//!     }
//! }
//! ```

use std::collections::HashSet;

use pickdom::{Document, NodeKey};

use crate::config::{Config, Selectors};
use crate::error::InitError;
use crate::filter::{self, SearchText};
use crate::mount::{self, Anchors};
use crate::registry::OptionRegistry;
use crate::render::{self, RenderContext, RenderedRow};

pub trait Behavior {
    /// Attach to the document around `control`.
    ///
    /// Must not mutate the document when it fails.
    fn initialize(
        &self,
        doc: &mut Document,
        control: NodeKey,
        config: &Config,
        selectors: &Selectors,
    ) -> Result<Anchors, InitError> {
        mount::initialize(doc, control, config, selectors)
    }

    /// One row per option, in registry order.
    fn render_options(&self, registry: &OptionRegistry, cx: &RenderContext<'_>) -> Vec<RenderedRow> {
        render::option_rows(registry, cx)
    }

    /// Markup for the selected-output panel.
    fn render_output(&self, registry: &OptionRegistry, cx: &RenderContext<'_>) -> String {
        render::selected_output(registry, cx)
    }

    /// Values whose rows stay visible for `search`.
    fn filter(&self, registry: &OptionRegistry, search: &SearchText) -> HashSet<String> {
        filter::visible_values(registry, search)
    }
}

/// Substring filtering and the stock templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBehavior;

impl Behavior for DefaultBehavior {}

/// Fuzzy label matching instead of substring matching.
///
/// Opt-in only. A widget built without `.behavior(FuzzyBehavior)` filters by
/// plain substring and never matches across gaps.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyBehavior;

impl Behavior for FuzzyBehavior {
    fn filter(&self, registry: &OptionRegistry, search: &SearchText) -> HashSet<String> {
        filter::fuzzy_visible_values(registry, search)
    }
}
