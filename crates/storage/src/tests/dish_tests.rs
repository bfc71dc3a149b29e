#![allow(clippy::unwrap_used, reason = "test code")]

use super::{create_test_storage, name, names};
use crate::traits::DishStore;

async fn listed_names(storage: &impl DishStore) -> Vec<String> {
    storage.list_all().await.unwrap().into_iter().map(|d| d.name).collect()
}

#[tokio::test]
async fn insert_then_list_contains_trimmed_name_once() {
    let storage = create_test_storage();
    storage.insert_one(&name("  宫保鸡丁  ")).await.unwrap();

    let listed = listed_names(&storage).await;
    assert_eq!(listed, vec!["宫保鸡丁"]);
}

#[tokio::test]
async fn padded_and_plain_names_collide() {
    let storage = create_test_storage();
    storage.insert_one(&name("X")).await.unwrap();

    let err = storage.insert_one(&name("  X  ")).await.unwrap_err();
    assert!(err.is_duplicate(), "expected duplicate, got {err:?}");
    assert_eq!(storage.count().await.unwrap(), 1);
}

#[tokio::test]
async fn batch_skips_duplicates_without_failing() {
    let storage = create_test_storage();
    storage.insert_one(&name("A")).await.unwrap();

    let inserted = storage.insert_many(&names(&["A", "B", "B", "C"])).await.unwrap();
    let inserted: Vec<_> = inserted.into_iter().map(|d| d.name).collect();
    assert_eq!(inserted, vec!["B", "C"]);
    assert_eq!(storage.count().await.unwrap(), 3);
}

#[tokio::test]
async fn batch_with_repeats_stores_distinct_rows() {
    let storage = create_test_storage();
    storage.insert_many(&names(&["A", "A", "B"])).await.unwrap();

    let mut listed = listed_names(&storage).await;
    listed.sort();
    assert_eq!(listed, vec!["A", "B"]);
}

#[tokio::test]
async fn list_is_newest_first() {
    let storage = create_test_storage();
    for dish in ["first", "second", "third"] {
        storage.insert_one(&name(dish)).await.unwrap();
    }
    assert_eq!(listed_names(&storage).await, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn deleting_absent_name_is_a_noop() {
    let storage = create_test_storage();
    storage.insert_one(&name("红烧肉")).await.unwrap();

    let removed = storage.delete_by_name(&name("不存在")).await.unwrap();
    assert_eq!(removed, 0);
    assert_eq!(listed_names(&storage).await, vec!["红烧肉"]);
}

#[tokio::test]
async fn delete_by_name_removes_row() {
    let storage = create_test_storage();
    storage.insert_many(&names(&["红烧肉", "水煮鱼"])).await.unwrap();

    assert_eq!(storage.delete_by_name(&name(" 红烧肉 ")).await.unwrap(), 1);
    assert_eq!(listed_names(&storage).await, vec!["水煮鱼"]);
}

#[tokio::test]
async fn delete_all_empties_table() {
    let storage = create_test_storage();
    storage.insert_many(&names(&["a", "b", "c"])).await.unwrap();

    assert_eq!(storage.delete_all().await.unwrap(), 3);
    assert!(storage.list_all().await.unwrap().is_empty());
    assert_eq!(storage.count().await.unwrap(), 0);
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let storage = create_test_storage();
    let first = storage.insert_one(&name("a")).await.unwrap();
    storage.delete_all().await.unwrap();
    let second = storage.insert_one(&name("a")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn pick_random_returns_stored_dish() {
    let storage = create_test_storage();
    assert!(storage.pick_random().await.unwrap().is_none());

    storage.insert_many(&names(&["a", "b", "c"])).await.unwrap();
    let stored = listed_names(&storage).await;
    for _ in 0..50 {
        let picked = storage.pick_random().await.unwrap().unwrap();
        assert!(stored.contains(&picked.name));
    }
}
