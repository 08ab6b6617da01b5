use rmcp::model::CallToolResult;
use std::fs;
use tempfile::TempDir;

use super::*;
use crate::mcp::types::{CheckpointArgs, CleanupArgs, ListUndosArgs, StatusArgs, UndoArgs};
use crate::tracker::{create_shared_tracker, SharedTracker};

fn text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.clone()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}

fn setup() -> (TempDir, SharedTracker) {
    let temp_dir = TempDir::new().unwrap();
    let tracker = create_shared_tracker(temp_dir.path().to_path_buf());
    (temp_dir, tracker)
}

#[test]
fn test_checkpoint_args_description_optional() {
    let args: CheckpointArgs = serde_json::from_value(serde_json::json!({
        "files": ["a.txt", "b.txt"]
    }))
    .unwrap();
    assert_eq!(args.files, vec!["a.txt", "b.txt"]);
    assert!(args.description.is_none());

    let missing_files = serde_json::from_value::<CheckpointArgs>(serde_json::json!({}));
    assert!(missing_files.is_err());
}

#[tokio::test]
async fn test_checkpoint_then_undo() {
    let (temp_dir, tracker) = setup();
    fs::write(temp_dir.path().join("a.txt"), "before").unwrap();

    let result = checkpoint(
        &tracker,
        CheckpointArgs {
            files: vec!["a.txt".to_string()],
            description: Some("Rewrite a".to_string()),
        },
    )
    .await
    .unwrap();
    assert!(!is_error(&result));
    assert_eq!(
        text(&result),
        "✅ Checkpoint created: \"Rewrite a\"\nFiles captured: 1\n  - a.txt"
    );

    fs::write(temp_dir.path().join("a.txt"), "after").unwrap();

    let result = undo(&tracker, UndoArgs {}).await.unwrap();
    assert!(!is_error(&result));
    assert_eq!(
        text(&result),
        "✅ Undone: \"Rewrite a\"\nRestored files:\n  - a.txt"
    );
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(),
        "before"
    );
}

#[tokio::test]
async fn test_checkpoint_default_description() {
    let (temp_dir, tracker) = setup();
    fs::write(temp_dir.path().join("a.txt"), "x").unwrap();

    let result = checkpoint(
        &tracker,
        CheckpointArgs {
            files: vec!["a.txt".to_string()],
            description: Some("   ".to_string()),
        },
    )
    .await
    .unwrap();
    assert!(text(&result).starts_with("✅ Checkpoint created: \"Manual checkpoint\""));
}

#[tokio::test]
async fn test_checkpoint_empty_files_is_error() {
    let (_temp_dir, tracker) = setup();

    let result = checkpoint(
        &tracker,
        CheckpointArgs {
            files: vec![],
            description: None,
        },
    )
    .await
    .unwrap();
    assert!(is_error(&result));
    assert_eq!(text(&result), "Error: Files array is required");
}

#[tokio::test]
async fn test_undo_empty_stack_is_error() {
    let (_temp_dir, tracker) = setup();

    let result = undo(&tracker, UndoArgs {}).await.unwrap();
    assert!(is_error(&result));
    assert_eq!(text(&result), "No checkpoints to undo");
}

#[tokio::test]
async fn test_list_status_cleanup() {
    let (temp_dir, tracker) = setup();
    fs::write(temp_dir.path().join("a.txt"), "1").unwrap();

    checkpoint(
        &tracker,
        CheckpointArgs {
            files: vec!["a.txt".to_string(), "new.txt".to_string()],
            description: Some("Edit a, add new".to_string()),
        },
    )
    .await
    .unwrap();
    fs::write(temp_dir.path().join("a.txt"), "2").unwrap();

    let listing = text(&list_undos(&tracker, ListUndosArgs {}).await.unwrap());
    assert!(listing.starts_with("Undo Stack:\n[1] Edit a, add new\n"));
    assert!(listing.contains("    ~ a.txt"));
    assert!(listing.contains("    + new.txt"));

    let status_text = text(&status(&tracker, StatusArgs {}).await.unwrap());
    assert_eq!(
        status_text,
        "📊 Undo System Status:\nCheckpoints: 1\nCan Undo: true"
    );

    let cleared = cleanup(&tracker, CleanupArgs {}).await.unwrap();
    assert_eq!(text(&cleared), "✅ All undo checkpoints cleared");

    let listing = text(&list_undos(&tracker, ListUndosArgs {}).await.unwrap());
    assert_eq!(listing, "Undo Stack:\nNo undo checkpoints available");
    let status_text = text(&status(&tracker, StatusArgs {}).await.unwrap());
    assert!(status_text.ends_with("Checkpoints: 0\nCan Undo: false"));
}
