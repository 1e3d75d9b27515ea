//! Widget lifecycle tests - mounting, teardown, idempotence, disposal

mod common;

use common::{recording_editor, view, widget};
use tagfield::{FallbackMap, LabelMap, Phase, TemplateEditor};

// ========================================================================
// Mounting
// ========================================================================

#[test]
fn test_initial_value_with_tokens_mounts_tags() {
    let editor = TemplateEditor::new("Hi {{firstName}}, bye {{lastName}}");
    assert_eq!(editor.live_widget_count(), 2);
    assert_eq!(editor.render_count(), 1);
    assert_eq!(view(&editor), "Hi [First Name ×], bye [Last Name ×]");
}

#[test]
fn test_plain_value_never_mounts() {
    let mut editor = TemplateEditor::new("hello world");
    editor.set_value("hello world, again");
    editor.run_until_idle();

    assert_eq!(editor.widgets().mounted_total(), 0);
    assert_eq!(editor.render_count(), 0);
}

#[test]
fn test_labels_and_fallbacks_reach_tags() {
    let mut fallbacks = FallbackMap::new();
    fallbacks.insert("firstName".to_string(), "friend".to_string());
    fallbacks.insert("email".to_string(), String::new());
    let labels = LabelMap::new().with("email", "Email Address");

    let editor = TemplateEditor::with_options("{{firstName}} <{{email}}>", fallbacks, labels);
    assert_eq!(view(&editor), "[First Name | friend ×] <[Email Address ×]>");
}

#[test]
fn test_each_occurrence_gets_its_own_widget() {
    let editor = TemplateEditor::new("{{a}} {{a}}");
    let ids = editor.surface().anchored_widgets();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}

// ========================================================================
// Re-render replaces the previous generation
// ========================================================================

#[test]
fn test_rerender_keeps_one_generation_alive() {
    let mut editor = TemplateEditor::new("{{a}} {{b}}");
    let first = editor.surface().anchored_widgets();

    editor.set_value("{{a}} {{b}} {{c}}");
    editor.run_until_idle();
    editor.set_value("{{a}} {{b}}");
    editor.run_until_idle();

    assert_eq!(editor.render_count(), 3);
    assert_eq!(editor.live_widget_count(), 2);
    assert_eq!(editor.widgets().destroyed_total(), 5);
    let current = editor.surface().anchored_widgets();
    assert!(first.iter().all(|id| !current.contains(id)));
    assert!(first.iter().all(|id| editor.widgets().get(*id).is_none()));
}

#[test]
fn test_same_value_twice_yields_same_segments() {
    let mut editor = TemplateEditor::new("");
    editor.set_value("Hi {{a}}");
    editor.run_until_idle();
    let segments = editor.surface().segments();
    let live = editor.live_widget_count();

    // Re-sending the identical value does not rebuild anything
    editor.set_value("Hi {{a}}");
    editor.run_until_idle();

    assert_eq!(editor.surface().segments(), segments);
    assert_eq!(editor.live_widget_count(), live);
    assert_eq!(editor.render_count(), 1);
}

#[test]
fn test_removing_last_tag_destroys_it() {
    let (mut editor, changes, _) = recording_editor("Hi {{a}}");
    editor.close_token(widget(&editor, "a"));
    common::feed_back(&mut editor, &changes);

    assert_eq!(editor.value(), "Hi ");
    assert_eq!(editor.live_widget_count(), 0);
    assert_eq!(view(&editor), "Hi ");
}

// ========================================================================
// Disposal
// ========================================================================

#[test]
fn test_dispose_tears_everything_down() {
    let (mut editor, changes, clicks) = recording_editor("Hi {{a}} {{b}}");
    let a = widget(&editor, "a");

    editor.dispose();

    assert_eq!(editor.live_widget_count(), 0);
    assert_eq!(editor.phase(), Phase::Disposed);
    assert!(editor.surface().is_empty());

    editor.click_token(a);
    editor.close_token(a);
    editor.type_text("x");
    editor.content_changed();
    editor.set_value("{{c}}");
    editor.run_until_idle();

    assert!(changes.borrow().is_empty());
    assert!(clicks.borrow().is_empty());
    assert_eq!(editor.live_widget_count(), 0);
    assert_eq!(editor.widgets().mounted_total(), 2);
}

#[test]
fn test_dispose_twice_is_harmless() {
    let mut editor = TemplateEditor::new("{{a}}");
    editor.dispose();
    editor.dispose();
    assert!(editor.is_disposed());
}

#[test]
fn test_dispose_drops_pending_settle() {
    let mut editor = TemplateEditor::new("");
    editor.set_value("{{a}}");
    assert!(editor.has_pending());
    editor.dispose();
    assert!(!editor.has_pending());
    assert_eq!(editor.tick(), 0);
}
