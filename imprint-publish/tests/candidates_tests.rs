//! Tests for candidate set construction.

use chrono::Utc;
use imprint_publish::build_candidates;
use imprint_repo::MemoryRepository;
use imprint_types::{
    ContentItem, ContentItemId, ContentStore, Locale, PropagationOptions, ALL_FIELDS,
};
use pretty_assertions::assert_eq;

fn options() -> PropagationOptions {
    PropagationOptions::for_items(
        ContentStore::new("master"),
        ContentStore::new("web"),
        Locale::new("en"),
        Utc::now(),
    )
}

fn repo_with(ids: &[ContentItemId]) -> MemoryRepository {
    let repo = MemoryRepository::new();
    repo.add_store("master");
    for (i, &id) in ids.iter().enumerate() {
        repo.add_item("master", ContentItem::new(id, format!("/content/{i}")));
    }
    repo
}

#[tokio::test]
async fn empty_input_builds_no_candidates() {
    let repo = repo_with(&[]);
    let built = build_candidates(&[], &ContentStore::new("master"), &repo, &options())
        .await
        .unwrap();
    assert!(built.is_empty());
}

#[tokio::test]
async fn preserves_input_order() {
    let ids: Vec<ContentItemId> = (0..4).map(|_| ContentItemId::new()).collect();
    let repo = repo_with(&ids);

    let built = build_candidates(&ids, &ContentStore::new("master"), &repo, &options())
        .await
        .unwrap();

    let built_ids: Vec<ContentItemId> = built.iter().map(|c| c.item_id).collect();
    assert_eq!(built_ids, ids);
}

#[tokio::test]
async fn skips_ids_missing_from_the_source_store() {
    let present = ContentItemId::new();
    let missing = ContentItemId::new();
    let repo = repo_with(&[present]);

    let built = build_candidates(
        &[missing, present],
        &ContentStore::new("master"),
        &repo,
        &options(),
    )
    .await
    .unwrap();

    assert_eq!(built.len(), 1);
    assert_eq!(built[0].item_id, present);
}

#[tokio::test]
async fn candidates_select_all_fields_and_share_options() {
    let id = ContentItemId::new();
    let repo = repo_with(&[id]);
    let opts = options();

    let built = build_candidates(&[id], &ContentStore::new("master"), &repo, &opts)
        .await
        .unwrap();

    assert_eq!(built[0].field_selector, ALL_FIELDS);
    assert_eq!(built[0].options, opts);
}
