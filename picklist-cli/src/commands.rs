use std::path::PathBuf;

use clap::ArgMatches;
use log::{debug, info};

use picklist::prelude::*;

use crate::error::CliError;
use crate::page::Page;

pub fn run_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some(("render", sub_matches)) => handle_render(sub_matches),
        Some(("state", sub_matches)) => handle_state(sub_matches),
        _ => {
            log::error!("[cli] unknown command");
            Ok(())
        }
    }
}

fn load_page(matches: &ArgMatches) -> Result<Page, CliError> {
    let path = matches
        .get_one::<PathBuf>("page")
        .cloned()
        .unwrap_or_default();
    info!("[cli] loading page {}", path.display());
    Page::load(&path)
}

fn handle_render(matches: &ArgMatches) -> Result<(), CliError> {
    let page = load_page(matches)?;
    let destroy = matches.get_flag("destroy");
    let markup = if matches.get_flag("fuzzy") {
        render(&page, FuzzyBehavior, destroy)?
    } else {
        render(&page, DefaultBehavior, destroy)?
    };
    println!("{markup}");
    Ok(())
}

fn handle_state(matches: &ArgMatches) -> Result<(), CliError> {
    let page = load_page(matches)?;
    let options = if matches.get_flag("fuzzy") {
        state(&page, FuzzyBehavior)?
    } else {
        state(&page, DefaultBehavior)?
    };
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}

/// Mount on a fresh document built from `page` and replay its script.
fn play<B: Behavior>(
    page: &Page,
    behavior: B,
) -> Result<(Document, SearchableSelect<B>), CliError> {
    let mut doc = page.document();
    let mut widget = SearchableSelect::builder(page.control.as_str())
        .defaults(page.defaults.clone())
        .overrides(page.overrides.clone())
        .behavior(behavior)
        .mount(&mut doc)?;

    for (step, interaction) in page.script.iter().enumerate() {
        let result = widget.handle(&mut doc, interaction);
        debug!("[cli] step {}: {:?} -> {:?}", step + 1, interaction, result);
    }
    info!(
        "[cli] replayed {} interaction(s), {} option(s) selected",
        page.script.len(),
        widget.selected_values().len()
    );
    Ok((doc, widget))
}

pub fn render<B: Behavior>(page: &Page, behavior: B, destroy: bool) -> Result<String, CliError> {
    let (mut doc, widget) = play(page, behavior)?;
    if destroy {
        widget.destroy(&mut doc);
    }
    Ok(doc.to_markup())
}

pub fn state<B: Behavior>(page: &Page, behavior: B) -> Result<Vec<SelectOption>, CliError> {
    let (_, widget) = play(page, behavior)?;
    Ok(widget.options().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use picklist::ContainerRole;

    fn page() -> Page {
        Page::from_json(
            r#"{
                "control": "langs",
                "options": [
                    { "value": "rs", "label": "Rust" },
                    { "value": "go", "label": "Go" },
                    { "value": "zig", "label": "Zig" }
                ],
                "emptyOutput": "<li>none</li>",
                "script": [
                    { "type": "selectRow", "value": "zig" },
                    { "type": "selectRow", "value": "rs" },
                    { "type": "searchChanged", "text": "G" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_state_reports_selection() {
        let options = state(&page(), DefaultBehavior).unwrap();
        let selected: Vec<_> = options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(selected, vec!["rs", "zig"]);
    }

    #[test]
    fn test_render_includes_filtered_list() {
        let markup = render(&page(), DefaultBehavior, false).unwrap();
        assert!(markup.contains("value=\"g\""));
        assert!(markup.contains("<option selected=\"selected\" value=\"zig\">Zig</option>"));
        assert!(markup.contains("display: none;"));
    }

    #[test]
    fn test_render_after_destroy_restores_containers() {
        let markup = render(&page(), DefaultBehavior, true).unwrap();
        assert!(!markup.contains("searchable-select-all"));
        assert!(markup.contains("<ul id=\"selected-list\"><li>none</li></ul>"));
    }

    #[test]
    fn test_missing_control_is_an_init_error() {
        let mut doc = page().document();
        let before = doc.to_markup();

        let err = SearchableSelect::builder("other").mount(&mut doc).unwrap_err();
        assert_eq!(err, InitError::ControlNotFound("other".to_string()));
        assert_eq!(doc.to_markup(), before);
        assert!(matches!(
            CliError::from(err),
            CliError::Init(InitError::ControlNotFound(_))
        ));
    }

    #[test]
    fn test_missing_list_container_fails_render() {
        let mut page = page();
        page.list_class = "nowhere".to_string();
        let err = render(&page, DefaultBehavior, false).unwrap_err();
        assert!(matches!(
            err,
            CliError::Init(InitError::MissingContainer {
                role: ContainerRole::OptionList,
                ..
            })
        ));
    }
}
