//! The mounted widget.
//!
//! [`SearchableSelect`] owns everything about one instance: its resolved
//! configuration, the option registry, the search text and the select-all
//! state. Nothing is shared between instances, so several widgets can live
//! in one document as long as each is handed its own events.
//!
//! ```ignore
//! let mut widget = SearchableSelect::builder("people")
//!     .overrides(ConfigLayer::new().placeholder_text("Find someone"))
//!     .mount(&mut doc)?;
//!
//! widget.select(&mut doc, "a");
//! widget.set_search_text(&mut doc, "bo");
//! ```

use pickdom::Document;

use crate::behavior::{Behavior, DefaultBehavior};
use crate::binding::{self, EventResult, Interaction, RawEvent};
use crate::config::{Config, ConfigLayer, Selectors};
use crate::controller::{self, Action, Transition};
use crate::error::InitError;
use crate::filter::SearchText;
use crate::mount::{self, Anchors};
use crate::option::SelectOption;
use crate::registry::OptionRegistry;
use crate::render::{self, RenderContext};
use crate::select_all::SelectAllControl;

// =============================================================================
// Builder
// =============================================================================

/// Collects configuration layers and a behavior, then mounts.
#[derive(Debug, Clone)]
pub struct Builder<B = DefaultBehavior> {
    control_id: String,
    defaults: ConfigLayer,
    overrides: ConfigLayer,
    behavior: B,
}

impl Builder {
    pub fn new(control_id: impl Into<String>) -> Self {
        Self {
            control_id: control_id.into(),
            defaults: ConfigLayer::default(),
            overrides: ConfigLayer::default(),
            behavior: DefaultBehavior,
        }
    }
}

impl<B: Behavior> Builder<B> {
    /// Programmatic defaults; the control's `data-*` attributes win over these.
    pub fn defaults(mut self, layer: ConfigLayer) -> Self {
        self.defaults = layer;
        self
    }

    /// Explicit overrides; these win over everything.
    pub fn overrides(mut self, layer: ConfigLayer) -> Self {
        self.overrides = layer;
        self
    }

    pub fn behavior<C: Behavior>(self, behavior: C) -> Builder<C> {
        Builder {
            control_id: self.control_id,
            defaults: self.defaults,
            overrides: self.overrides,
            behavior,
        }
    }

    /// Attach to the control and render both views.
    ///
    /// On error the document is left unchanged.
    pub fn mount(self, doc: &mut Document) -> Result<SearchableSelect<B>, InitError> {
        let control = mount::locate_control(doc, &self.control_id)?;
        let attributes = doc
            .get(control)
            .map(ConfigLayer::from_attributes)
            .unwrap_or_default();
        let config = Config::layered([&self.defaults, &attributes, &self.overrides]);
        let selectors = config.selectors()?;

        let registry = doc
            .get(control)
            .map(OptionRegistry::from_control)
            .unwrap_or_default();
        let anchors = self.behavior.initialize(doc, control, &config, &selectors)?;
        let select_all = SelectAllControl::new(config.select_all_text.clone());

        let widget = SearchableSelect {
            config,
            selectors,
            registry,
            search: SearchText::default(),
            select_all,
            anchors,
            behavior: self.behavior,
        };
        widget.refresh(doc);

        log::info!(
            "[widget] mounted #{} with {} options ({} selected)",
            widget.anchors.control_id,
            widget.registry.len(),
            widget.registry.selected().count()
        );
        Ok(widget)
    }
}

// =============================================================================
// Widget
// =============================================================================

#[derive(Debug)]
pub struct SearchableSelect<B = DefaultBehavior> {
    config: Config,
    selectors: Selectors,
    registry: OptionRegistry,
    search: SearchText,
    select_all: SelectAllControl,
    anchors: Anchors,
    behavior: B,
}

impl SearchableSelect {
    pub fn builder(control_id: impl Into<String>) -> Builder {
        Builder::new(control_id)
    }
}

impl<B: Behavior> SearchableSelect<B> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    pub fn options(&self) -> &[SelectOption] {
        self.registry.list()
    }

    pub fn selected_values(&self) -> Vec<&str> {
        self.registry.selected_values()
    }

    pub fn search_text(&self) -> &SearchText {
        &self.search
    }

    pub fn select_all_control(&self) -> &SelectAllControl {
        &self.select_all
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            config: &self.config,
            selectors: &self.selectors,
            search: &self.search,
            empty_output: &self.anchors.empty_output,
        }
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Rebuild both views from the registry and re-apply the search.
    pub fn refresh(&self, doc: &mut Document) {
        let cx = self.render_context();
        render::refresh(doc, &self.anchors, &self.registry, &cx, &self.behavior);
    }

    /// Store the search text and re-filter the rendered rows.
    ///
    /// Selection state is untouched. Rows are toggled, not re-rendered; only
    /// the container shell is redrawn so the search input shows the text.
    pub fn set_search_text(&mut self, doc: &mut Document, raw: &str) -> usize {
        self.search = SearchText::new(raw);
        render::rewrap_rows(doc, self.anchors.list, &self.render_context());
        let hidden = render::refilter(
            doc,
            self.anchors.list,
            &self.registry,
            &self.search,
            &self.behavior,
        );
        log::debug!(
            "[widget] #{} search {:?}: {} of {} rows hidden",
            self.anchors.control_id,
            self.search.as_str(),
            hidden,
            self.registry.len()
        );
        hidden
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Apply a selection transition, then sync the control and refresh.
    pub fn apply(&mut self, doc: &mut Document, action: &Action) -> Transition {
        let transition =
            controller::apply(&mut self.registry, &mut self.select_all, action, &self.config);
        log::debug!(
            "[widget] #{} {:?}: {} option(s) matched",
            self.anchors.control_id,
            action,
            transition.matched
        );

        mount::sync_control(doc, self.anchors.control, &self.registry);
        if transition.select_all_changed {
            mount::render_select_all(doc, &self.anchors, &self.select_all, &self.config);
        }
        self.refresh(doc);
        transition
    }

    pub fn select(&mut self, doc: &mut Document, value: &str) -> Transition {
        self.apply(doc, &Action::Select(value.to_string()))
    }

    pub fn deselect(&mut self, doc: &mut Document, value: &str) -> Transition {
        self.apply(doc, &Action::Deselect(value.to_string()))
    }

    pub fn select_all(&mut self, doc: &mut Document) -> Transition {
        self.apply(doc, &Action::SelectAll)
    }

    pub fn deselect_all(&mut self, doc: &mut Document) -> Transition {
        self.apply(doc, &Action::DeselectAll)
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    pub fn handle(&mut self, doc: &mut Document, interaction: &Interaction) -> EventResult {
        match interaction {
            Interaction::SelectRow { value } => {
                self.select(doc, value);
            }
            Interaction::RemoveRow { value } => {
                self.deselect(doc, value);
            }
            Interaction::SearchChanged { text } => {
                self.set_search_text(doc, text);
            }
            Interaction::SelectAllToggled { checked: true } => {
                self.select_all(doc);
            }
            Interaction::SelectAllToggled { checked: false } => {
                self.deselect_all(doc);
            }
        }
        EventResult::Consumed
    }

    /// Resolve a raw host event and handle it if it is an interaction.
    pub fn dispatch(&mut self, doc: &mut Document, event: &RawEvent) -> EventResult {
        match binding::resolve(event, &self.selectors) {
            Some(interaction) => self.handle(doc, &interaction),
            None => EventResult::Ignored,
        }
    }

    /// Detach from the document and hand back the final option state.
    ///
    /// The backing control keeps the selection as `selected` attributes.
    pub fn destroy(self, doc: &mut Document) -> OptionRegistry {
        mount::teardown(doc, &self.anchors);
        log::info!("[widget] destroyed #{}", self.anchors.control_id);
        self.registry
    }
}
