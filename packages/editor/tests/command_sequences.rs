//! Script-level tests: JSON command arrays folded through the pure reducer,
//! the way the CLI's `apply` subcommand and a remote front-end drive it.

use mailsmith_editor::{reducer, BlockKind, BlockProps, Command, Document};
use mailsmith_model::{ButtonGridProps, ButtonItem, IdGenerator};

fn run_script(doc: Document, script: serde_json::Value) -> Document {
    let commands: Vec<Command> = serde_json::from_value(script).unwrap();
    commands
        .iter()
        .fold(doc, |acc, command| reducer::apply(&acc, command))
}

#[test]
fn test_script_builds_expected_layout() {
    let doc = run_script(
        Document::empty(),
        serde_json::json!([
            { "command": "add-block", "kind": "brand-header", "id": "s-1" },
            { "command": "add-block", "kind": "text-section", "id": "s-2" },
            { "command": "add-block", "kind": "footer", "id": "s-3" },
            { "command": "add-block", "kind": "hero-banner", "id": "s-4", "index": 0 },
        ]),
    );

    assert_eq!(doc.header.as_ref().map(|b| b.id.as_str()), Some("s-1"));
    assert_eq!(doc.footer.as_ref().map(|b| b.id.as_str()), Some("s-3"));
    let order: Vec<&str> = doc.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(order, vec!["s-4", "s-2"]);
}

#[test]
fn test_script_application_is_deterministic() {
    let script = serde_json::json!([
        { "command": "add-block", "kind": "text-section", "id": "d-1" },
        { "command": "add-block", "kind": "single-button", "id": "d-2" },
        { "command": "move-block", "id": "d-2", "direction": "up" },
        { "command": "select-block", "id": "d-1" },
    ]);

    let a = run_script(Document::empty(), script.clone());
    let b = run_script(Document::empty(), script);
    assert_eq!(a, b);
}

#[test]
fn test_update_patch_from_wire_merges_item_lists() {
    let mut ids = IdGenerator::new("wire");
    let doc = Document::with_defaults(&mut ids);

    let doc = run_script(
        doc,
        serde_json::json!([
            { "command": "add-block", "kind": "button-grid", "id": "w-1" },
            {
                "command": "update-props",
                "id": "w-1",
                "patch": {
                    "type": "button-grid",
                    "props": {
                        "buttons": [{ "text": "Shop", "url": "https://example.com/shop" }]
                    }
                }
            },
        ]),
    );

    match &doc.find_block("w-1").unwrap().props {
        BlockProps::ButtonGrid(grid) => {
            let buttons = &grid.buttons;
            assert_eq!(buttons[0].text.as_deref(), Some("Shop"));
            // catalog entries past the patch survive the merge
            assert!(buttons.len() >= 3);
            assert_eq!(buttons[1].text.as_deref(), Some("Button 2"));
        }
        other => panic!("wrong variant: {other:?}"),
    }
}

#[test]
fn test_cross_variant_patch_cannot_change_block_type() {
    let doc = run_script(
        Document::empty(),
        serde_json::json!([
            { "command": "add-block", "kind": "text-section", "id": "x-1" },
            {
                "command": "update-props",
                "id": "x-1",
                "patch": { "type": "hero-banner", "props": { "title": "Nope" } }
            },
        ]),
    );

    assert!(matches!(
        doc.find_block("x-1").unwrap().props,
        BlockProps::TextSection(_)
    ));
}

#[test]
fn test_malformed_targets_leave_document_untouched() {
    let before = run_script(
        Document::empty(),
        serde_json::json!([
            { "command": "add-block", "kind": "text-section", "id": "m-1" },
        ]),
    );

    let after = run_script(
        before.clone(),
        serde_json::json!([
            { "command": "delete-block", "id": "nope" },
            { "command": "move-block", "id": "m-1", "direction": "up" },
            { "command": "duplicate-block", "id": "m-1", "new_id": "m-1" },
            { "command": "add-block", "kind": "text-section", "id": "m-1" },
            { "command": "select-block", "id": "nope" },
        ]),
    );

    assert_eq!(before, after);
}

#[test]
fn test_duplicate_then_edit_leaves_original_alone() {
    let doc = run_script(
        Document::empty(),
        serde_json::json!([
            { "command": "add-block", "kind": "button-grid", "id": "c-1" },
            { "command": "duplicate-block", "id": "c-1", "new_id": "c-2" },
            {
                "command": "update-props",
                "id": "c-2",
                "patch": {
                    "type": "button-grid",
                    "props": { "buttonCount": 1 }
                }
            },
        ]),
    );

    let count = |props: &BlockProps| match props {
        BlockProps::ButtonGrid(ButtonGridProps { button_count, .. }) => *button_count,
        other => panic!("wrong variant: {other:?}"),
    };

    assert_eq!(count(&doc.find_block("c-1").unwrap().props), Some(3));
    assert_eq!(count(&doc.find_block("c-2").unwrap().props), Some(1));
}

#[test]
fn test_unknown_command_payload_is_a_parse_error_not_a_crash() {
    let script = serde_json::json!([
        { "command": "explode-everything" }
    ]);
    let parsed: Result<Vec<Command>, _> = serde_json::from_value(script);
    assert!(parsed.is_err());
}

#[test]
fn test_button_item_wire_shape() {
    let item: ButtonItem =
        serde_json::from_value(serde_json::json!({ "text": "Go", "url": "/go" })).unwrap();
    assert_eq!(item.text.as_deref(), Some("Go"));
    assert_eq!(item.url.as_deref(), Some("/go"));
}
