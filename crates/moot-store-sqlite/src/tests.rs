//! Integration tests for `SqliteStore` and the `Board` engine against
//! in-memory databases.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use moot_core::{Board, BoardStore, Category, SessionId, Suggestion};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn session(name: &str) -> SessionId { SessionId::from(name) }

async fn add(s: &SqliteStore, category: Category, content: &str) -> Suggestion {
  s.create_suggestion(category, content.to_owned())
    .await
    .unwrap()
    .expect("non-blank content accepted")
}

// ─── Suggestions ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_list_suggestion() {
  let s = store().await;

  let created = add(&s, Category::Food, "pizza").await;
  assert_eq!(created.category, Category::Food);
  assert_eq!(created.content, "pizza");

  let listed = s
    .list_by_category(Category::Food, session("s1"))
    .await
    .unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].suggestion_id, created.suggestion_id);
  assert_eq!(listed[0].content, "pizza");
  assert_eq!(listed[0].vote_count, 0);
  assert!(!listed[0].voted_by_requester);
  assert_eq!(listed[0].created_at, created.created_at);
}

#[tokio::test]
async fn create_stores_trimmed_content() {
  let s = store().await;
  let created = add(&s, Category::Food, "  pancakes  ").await;
  assert_eq!(created.content, "pancakes");
}

#[tokio::test]
async fn create_rejects_blank_content() {
  let s = store().await;

  let rejected = s
    .create_suggestion(Category::Food, "   ".to_owned())
    .await
    .unwrap();
  assert!(rejected.is_none());

  let listed = s
    .list_by_category(Category::Food, session("s1"))
    .await
    .unwrap();
  assert!(listed.is_empty());
}

#[tokio::test]
async fn listing_is_scoped_to_category() {
  let s = store().await;
  add(&s, Category::Food, "bibimbap").await;
  add(&s, Category::Festival, "karaoke").await;

  let food = s
    .list_by_category(Category::Food, session("s1"))
    .await
    .unwrap();
  let festival = s
    .list_by_category(Category::Festival, session("s1"))
    .await
    .unwrap();

  assert_eq!(food.len(), 1);
  assert_eq!(food[0].content, "bibimbap");
  assert_eq!(festival.len(), 1);
  assert_eq!(festival[0].content, "karaoke");
}

#[tokio::test]
async fn delete_missing_suggestion_is_noop() {
  let s = store().await;
  s.delete_suggestion(moot_core::SuggestionId(999))
    .await
    .unwrap();
}

#[tokio::test]
async fn delete_suggestion_cascades_votes() {
  let s = store().await;
  let target = add(&s, Category::Food, "tteokbokki").await;
  let keeper = add(&s, Category::Food, "gimbap").await;

  for name in ["s1", "s2", "s3"] {
    assert!(
      s.insert_vote(target.suggestion_id, session(name))
        .await
        .unwrap()
    );
  }
  s.insert_vote(keeper.suggestion_id, session("s1"))
    .await
    .unwrap();

  s.delete_suggestion(target.suggestion_id).await.unwrap();

  let listed = s
    .list_by_category(Category::Food, session("s1"))
    .await
    .unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].suggestion_id, keeper.suggestion_id);
  assert_eq!(listed[0].vote_count, 1);

  for name in ["s1", "s2", "s3"] {
    assert!(
      !s
        .has_vote(target.suggestion_id, session(name))
        .await
        .unwrap()
    );
  }

  // Repeat deletion is a no-op, not an error.
  s.delete_suggestion(target.suggestion_id).await.unwrap();
}

// ─── Votes ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn has_vote_tracks_insert_and_delete() {
  let s = store().await;
  let created = add(&s, Category::Food, "naengmyeon").await;
  let sess = session("s1");

  assert!(!s.has_vote(created.suggestion_id, sess.clone()).await.unwrap());

  assert!(s.insert_vote(created.suggestion_id, sess.clone()).await.unwrap());
  assert!(s.has_vote(created.suggestion_id, sess.clone()).await.unwrap());

  s.delete_vote_for(created.suggestion_id, sess.clone())
    .await
    .unwrap();
  assert!(!s.has_vote(created.suggestion_id, sess).await.unwrap());
}

#[tokio::test]
async fn duplicate_vote_insert_is_absorbed() {
  let s = store().await;
  let created = add(&s, Category::Food, "samgyeopsal").await;
  let sess = session("s1");

  assert!(s.insert_vote(created.suggestion_id, sess.clone()).await.unwrap());
  // Second insert of the same pair: no-op, not an error.
  assert!(!s.insert_vote(created.suggestion_id, sess.clone()).await.unwrap());

  let listed = s.list_by_category(Category::Food, sess).await.unwrap();
  assert_eq!(listed[0].vote_count, 1);
}

#[tokio::test]
async fn vote_insert_for_missing_suggestion_is_absorbed() {
  let s = store().await;
  let inserted = s
    .insert_vote(moot_core::SuggestionId(999), session("s1"))
    .await
    .unwrap();
  assert!(!inserted);
}

#[tokio::test]
async fn delete_vote_for_missing_pair_is_noop() {
  let s = store().await;
  let created = add(&s, Category::Food, "hotteok").await;
  s.delete_vote_for(created.suggestion_id, session("never-voted"))
    .await
    .unwrap();
}

#[tokio::test]
async fn vote_counts_are_computed_live() {
  let s = store().await;
  let created = add(&s, Category::Festival, "talent show").await;

  s.insert_vote(created.suggestion_id, session("s1"))
    .await
    .unwrap();
  s.insert_vote(created.suggestion_id, session("s2"))
    .await
    .unwrap();

  let listed = s
    .list_by_category(Category::Festival, session("viewer"))
    .await
    .unwrap();
  assert_eq!(listed[0].vote_count, 2);

  s.delete_vote_for(created.suggestion_id, session("s1"))
    .await
    .unwrap();

  let listed = s
    .list_by_category(Category::Festival, session("viewer"))
    .await
    .unwrap();
  assert_eq!(listed[0].vote_count, 1);
}

#[tokio::test]
async fn voted_by_requester_is_per_session() {
  let s = store().await;
  let created = add(&s, Category::Food, "jjajangmyeon").await;

  s.insert_vote(created.suggestion_id, session("s1"))
    .await
    .unwrap();

  let for_voter = s
    .list_by_category(Category::Food, session("s1"))
    .await
    .unwrap();
  let for_other = s
    .list_by_category(Category::Food, session("s2"))
    .await
    .unwrap();

  assert!(for_voter[0].voted_by_requester);
  assert!(!for_other[0].voted_by_requester);
  assert_eq!(for_voter[0].vote_count, for_other[0].vote_count);
}

// ─── Ranking ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn ranking_orders_by_votes_then_age_then_id() {
  let s = store().await;
  let t1 = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
  let t2 = Utc.with_ymd_and_hms(2025, 8, 1, 12, 5, 0).unwrap();
  let t3 = Utc.with_ymd_and_hms(2025, 8, 1, 12, 10, 0).unwrap();

  let a = s
    .insert_suggestion_at(Category::Food, "pajeon", t1)
    .await
    .unwrap();
  let b = s
    .insert_suggestion_at(Category::Food, "dakgalbi", t2)
    .await
    .unwrap();
  let c = s
    .insert_suggestion_at(Category::Food, "cake", t3)
    .await
    .unwrap();

  for name in ["s1", "s2", "s3"] {
    s.insert_vote(a.suggestion_id, session(name)).await.unwrap();
    s.insert_vote(b.suggestion_id, session(name)).await.unwrap();
  }
  for name in ["s1", "s2", "s3", "s4", "s5"] {
    s.insert_vote(c.suggestion_id, session(name)).await.unwrap();
  }

  let listed = s
    .list_by_category(Category::Food, session("viewer"))
    .await
    .unwrap();
  let ids: Vec<_> = listed.iter().map(|r| r.suggestion_id).collect();

  // Highest count first; among the 3-vote tie, the earlier creation wins.
  assert_eq!(ids, vec![c.suggestion_id, a.suggestion_id, b.suggestion_id]);
  assert_eq!(listed[0].vote_count, 5);
  assert_eq!(listed[1].vote_count, 3);
  assert_eq!(listed[2].vote_count, 3);
}

#[tokio::test]
async fn ranking_breaks_equal_timestamps_by_id() {
  let s = store().await;
  let t = Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap();

  let first = s
    .insert_suggestion_at(Category::Festival, "relay dance", t)
    .await
    .unwrap();
  let second = s
    .insert_suggestion_at(Category::Festival, "karaoke", t)
    .await
    .unwrap();
  assert!(first.suggestion_id < second.suggestion_id);

  // Equal vote counts and the same creation instant: lowest id first.
  s.insert_vote(first.suggestion_id, session("s1"))
    .await
    .unwrap();
  s.insert_vote(second.suggestion_id, session("s2"))
    .await
    .unwrap();

  let listed = s
    .list_by_category(Category::Festival, session("viewer"))
    .await
    .unwrap();
  assert_eq!(listed[0].suggestion_id, first.suggestion_id);
  assert_eq!(listed[1].suggestion_id, second.suggestion_id);
}

// ─── Board engine ────────────────────────────────────────────────────────────

#[tokio::test]
async fn board_add_suggestion_trims_and_rejects_blank() {
  let board = Board::new(store().await);

  let rejected = board.add_suggestion(Category::Food, "   ").await.unwrap();
  assert!(rejected.is_none());

  let accepted = board
    .add_suggestion(Category::Food, "  pizza  ")
    .await
    .unwrap()
    .expect("accepted");
  assert_eq!(accepted.content, "pizza");

  let listed = board
    .list_ranked(Category::Food, &session("s1"))
    .await
    .unwrap();
  assert_eq!(listed.len(), 1);
  assert_eq!(listed[0].vote_count, 0);
}

#[tokio::test]
async fn board_toggle_parity_matches_vote_presence() {
  let board = Board::new(store().await);
  let created = board
    .add_suggestion(Category::Food, "bulgogi")
    .await
    .unwrap()
    .unwrap();
  let sess = session("s1");

  // Odd toggle counts leave the vote present, even counts absent.
  for round in 1u32..=4 {
    let voted = board.toggle_vote(created.suggestion_id, &sess).await.unwrap();
    let odd = round % 2 == 1;
    assert_eq!(voted, odd);
    assert_eq!(
      board
        .store()
        .has_vote(created.suggestion_id, sess.clone())
        .await
        .unwrap(),
      odd
    );
  }
}

#[tokio::test]
async fn board_toggle_missing_suggestion_is_noop() {
  let board = Board::new(store().await);
  let voted = board
    .toggle_vote(moot_core::SuggestionId(999), &session("s1"))
    .await
    .unwrap();
  assert!(!voted);
}

#[tokio::test]
async fn board_toggle_after_delete_is_noop() {
  let s = store().await;
  let board = Board::new(s.clone());
  let created = board
    .add_suggestion(Category::Festival, "bonfire")
    .await
    .unwrap()
    .unwrap();
  let sess = session("s1");

  assert!(board.toggle_vote(created.suggestion_id, &sess).await.unwrap());
  board.delete_suggestion(created.suggestion_id).await.unwrap();

  // A stale view may still toggle the deleted id; it must not error.
  let voted = board.toggle_vote(created.suggestion_id, &sess).await.unwrap();
  assert!(!voted);

  let listed = board
    .list_ranked(Category::Festival, &sess)
    .await
    .unwrap();
  assert!(listed.is_empty());
}

#[tokio::test]
async fn board_concurrent_toggles_settle_to_a_single_state() {
  let s = store().await;
  let created = add(&s, Category::Food, "jjigae").await;
  let board = Arc::new(Board::new(s.clone()));
  let sess = session("racer");

  let mut handles = Vec::new();
  for _ in 0..2 {
    let board = Arc::clone(&board);
    let sess = sess.clone();
    let id = created.suggestion_id;
    handles.push(tokio::spawn(async move { board.toggle_vote(id, &sess).await }));
  }
  for handle in handles {
    // Neither toggle may surface a constraint error.
    handle.await.unwrap().unwrap();
  }

  let listed = s.list_by_category(Category::Food, sess.clone()).await.unwrap();
  let count = listed[0].vote_count;
  assert!(count <= 1, "pair double-voted: {count}");
  assert_eq!(
    s.has_vote(created.suggestion_id, sess).await.unwrap(),
    count == 1
  );
}

#[tokio::test]
async fn board_concurrent_toggles_from_distinct_sessions_both_count() {
  let s = store().await;
  let created = add(&s, Category::Food, "mandu").await;
  let board = Arc::new(Board::new(s.clone()));

  let mut handles = Vec::new();
  for name in ["s1", "s2"] {
    let board = Arc::clone(&board);
    let sess = session(name);
    let id = created.suggestion_id;
    handles.push(tokio::spawn(async move { board.toggle_vote(id, &sess).await }));
  }
  for handle in handles {
    assert!(handle.await.unwrap().unwrap());
  }

  let listed = s
    .list_by_category(Category::Food, session("viewer"))
    .await
    .unwrap();
  assert_eq!(listed[0].vote_count, 2);
}

#[tokio::test]
async fn board_list_ranked_is_stable_without_mutation() {
  let board = Board::new(store().await);
  let created = board
    .add_suggestion(Category::Food, "galbi")
    .await
    .unwrap()
    .unwrap();
  board
    .add_suggestion(Category::Food, "ramyeon")
    .await
    .unwrap()
    .unwrap();
  board
    .toggle_vote(created.suggestion_id, &session("s1"))
    .await
    .unwrap();

  let sess = session("s1");
  let first = board.list_ranked(Category::Food, &sess).await.unwrap();
  let second = board.list_ranked(Category::Food, &sess).await.unwrap();
  assert_eq!(first, second);
}
