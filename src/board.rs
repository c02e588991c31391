//! League Board
//!
//! The ordered dual-list state behind the UI: an `active` list and an
//! `archived` list of leagues, mutated only through reorder, archive and
//! unarchive. Every drop gesture funnels through [`LeagueBoard::handle_drop`],
//! which classifies the gesture into a [`DropAction`] before acting.
//!
//! Bad input (unknown ids, self-drops, stale gestures) never errors; each
//! operation degrades to a no-op so a malformed event can't break the UI.

use crate::models::{League, LeagueStatus};

/// Drop zone id for the archived section; dropping an active league here
/// archives it.
pub const ARCHIVE_ZONE_ID: &str = "archived-section";

/// Drop zone id for the active list container. Only used for hover
/// highlighting; dropping on the container itself moves nothing.
pub const ACTIVE_ZONE_ID: &str = "leagues-container";

/// Seed fixture loaded at startup
const SEED_JSON: &str = include_str!("../assets/leagues.json");

/// Which of the two lists an operation applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardList {
    Active,
    Archived,
}

/// Classified outcome of a completed drop gesture
///
/// `classify_drop` resolves each gesture to exactly one variant; the first
/// matching rule wins, so a drop on the archive zone can never fall through
/// to reorder logic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropAction {
    /// Move an active league to the end of the archived list
    Archive(String),
    /// Reorder within the active list
    ReorderActive { moved: String, target: String },
    /// Reorder within the archived list
    ReorderArchived { moved: String, target: String },
    /// Nothing to do (no target, unknown ids, self-drop, ...)
    Ignore,
}

/// Two ordered league lists with no id in both at once
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeagueBoard {
    pub active: Vec<League>,
    pub archived: Vec<League>,
}

impl LeagueBoard {
    /// Board seeded from the embedded fixture, all leagues active
    pub fn seeded() -> Self {
        Self {
            active: serde_json::from_str(SEED_JSON).unwrap_or_default(),
            archived: Vec::new(),
        }
    }

    fn list(&self, which: BoardList) -> &Vec<League> {
        match which {
            BoardList::Active => &self.active,
            BoardList::Archived => &self.archived,
        }
    }

    fn list_mut(&mut self, which: BoardList) -> &mut Vec<League> {
        match which {
            BoardList::Active => &mut self.active,
            BoardList::Archived => &mut self.archived,
        }
    }

    fn contains(&self, which: BoardList, id: &str) -> bool {
        self.list(which).iter().any(|l| l.id == id)
    }

    /// Move `moved_id` to the position `target_id` currently occupies;
    /// everything between the two shifts by one. No-op when either id is
    /// missing from the list or the ids are equal. Returns whether the
    /// list changed.
    pub fn reorder(&mut self, which: BoardList, moved_id: &str, target_id: &str) -> bool {
        if moved_id == target_id {
            return false;
        }
        let list = self.list_mut(which);
        let Some(old_index) = list.iter().position(|l| l.id == moved_id) else {
            return false;
        };
        let Some(new_index) = list.iter().position(|l| l.id == target_id) else {
            return false;
        };
        let moved = list.remove(old_index);
        // new_index was computed before the removal; inserting there puts
        // the moved league at the target's former position.
        list.insert(new_index, moved);
        true
    }

    /// Remove an active league, mark it Archived and append it to the
    /// archived list. No-op when the id is not active.
    pub fn archive(&mut self, moved_id: &str) -> bool {
        let Some(index) = self.active.iter().position(|l| l.id == moved_id) else {
            return false;
        };
        let mut league = self.active.remove(index);
        league.status = LeagueStatus::Archived;
        self.archived.push(league);
        true
    }

    /// Remove an archived league, mark it Post-Draft and append it to the
    /// active list. No-op when the id is not archived.
    pub fn unarchive(&mut self, moved_id: &str) -> bool {
        let Some(index) = self.archived.iter().position(|l| l.id == moved_id) else {
            return false;
        };
        let mut league = self.archived.remove(index);
        league.status = LeagueStatus::PostDraft;
        self.active.push(league);
        true
    }

    /// Classify a completed gesture without mutating anything.
    ///
    /// Rule order matters: the archive zone check runs first so its id
    /// string never reaches the reorder branches.
    pub fn classify_drop(&self, moved_id: &str, target_id: Option<&str>) -> DropAction {
        let Some(target) = target_id else {
            return DropAction::Ignore;
        };
        if target == ARCHIVE_ZONE_ID && self.contains(BoardList::Active, moved_id) {
            return DropAction::Archive(moved_id.to_string());
        }
        if moved_id != target {
            if self.contains(BoardList::Active, moved_id)
                && self.contains(BoardList::Active, target)
            {
                return DropAction::ReorderActive {
                    moved: moved_id.to_string(),
                    target: target.to_string(),
                };
            }
            if self.contains(BoardList::Archived, moved_id)
                && self.contains(BoardList::Archived, target)
            {
                return DropAction::ReorderArchived {
                    moved: moved_id.to_string(),
                    target: target.to_string(),
                };
            }
        }
        DropAction::Ignore
    }

    /// Single entry point for the drag layer: classify, then act.
    /// Returns the action taken so callers can log it.
    pub fn handle_drop(&mut self, moved_id: &str, target_id: Option<&str>) -> DropAction {
        let action = self.classify_drop(moved_id, target_id);
        match &action {
            DropAction::Archive(id) => {
                self.archive(id);
            }
            DropAction::ReorderActive { moved, target } => {
                self.reorder(BoardList::Active, moved, target);
            }
            DropAction::ReorderArchived { moved, target } => {
                self.reorder(BoardList::Archived, moved, target);
            }
            DropAction::Ignore => {}
        }
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_league(id: &str) -> League {
        League {
            id: id.to_string(),
            name: format!("League {}", id),
            logo: format!("/assets/img/league-{}.svg", id),
            provider: "ESPN".to_string(),
            year: "2023".to_string(),
            status: LeagueStatus::DraftLive,
        }
    }

    fn board_with(active: &[&str], archived: &[&str]) -> LeagueBoard {
        LeagueBoard {
            active: active.iter().map(|id| make_league(id)).collect(),
            archived: archived
                .iter()
                .map(|id| {
                    let mut l = make_league(id);
                    l.status = LeagueStatus::Archived;
                    l
                })
                .collect(),
        }
    }

    fn ids(list: &[League]) -> Vec<&str> {
        list.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn seeded_board_has_five_active_leagues() {
        let board = LeagueBoard::seeded();
        assert_eq!(ids(&board.active), ["1", "2", "3", "4", "5"]);
        assert!(board.archived.is_empty());
        assert_eq!(board.active[0].status, LeagueStatus::DraftLive);
        assert_eq!(board.active[1].status, LeagueStatus::PreDraft);
    }

    #[test]
    fn seed_logos_reference_shipped_assets() {
        let board = LeagueBoard::seeded();
        assert_eq!(board.active[0].logo, "/assets/img/league-1.svg");
        for league in &board.active {
            let rel = league.logo.trim_start_matches("/assets/");
            let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("assets")
                .join(rel);
            assert!(
                path.is_file(),
                "league {} points at a missing asset: {}",
                league.id,
                league.logo
            );
        }
    }

    #[test]
    fn reorder_moves_upward_to_target_position() {
        // Scenario: drop "3" on "1"
        let mut board = board_with(&["1", "2", "3"], &[]);
        assert!(board.reorder(BoardList::Active, "3", "1"));
        assert_eq!(ids(&board.active), ["3", "1", "2"]);
    }

    #[test]
    fn reorder_moves_downward_to_target_position() {
        let mut board = board_with(&["1", "2", "3", "4", "5"], &[]);
        assert!(board.reorder(BoardList::Active, "2", "4"));
        assert_eq!(ids(&board.active), ["1", "3", "4", "2", "5"]);
    }

    #[test]
    fn reorder_handles_adjacent_pairs_both_directions() {
        let mut board = board_with(&["1", "2", "3"], &[]);
        assert!(board.reorder(BoardList::Active, "1", "2"));
        assert_eq!(ids(&board.active), ["2", "1", "3"]);
        assert!(board.reorder(BoardList::Active, "1", "2"));
        assert_eq!(ids(&board.active), ["1", "2", "3"]);
    }

    #[test]
    fn reorder_spans_full_list() {
        let mut board = board_with(&["1", "2", "3", "4", "5"], &[]);
        assert!(board.reorder(BoardList::Active, "1", "5"));
        assert_eq!(ids(&board.active), ["2", "3", "4", "5", "1"]);
        assert!(board.reorder(BoardList::Active, "1", "2"));
        assert_eq!(ids(&board.active), ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn reorder_preserves_ids_and_length() {
        let mut board = board_with(&["1", "2", "3", "4", "5"], &[]);
        board.reorder(BoardList::Active, "4", "2");
        assert_eq!(board.active.len(), 5);
        let mut sorted = ids(&board.active);
        sorted.sort();
        assert_eq!(sorted, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn reorder_never_touches_status() {
        let mut board = board_with(&["1", "2", "3"], &[]);
        board.active[0].status = LeagueStatus::PreDraft;
        board.active[2].status = LeagueStatus::PostDraft;
        board.reorder(BoardList::Active, "3", "1");
        let status_of = |board: &LeagueBoard, id: &str| {
            board.active.iter().find(|l| l.id == id).map(|l| l.status)
        };
        assert_eq!(status_of(&board, "1"), Some(LeagueStatus::PreDraft));
        assert_eq!(status_of(&board, "2"), Some(LeagueStatus::DraftLive));
        assert_eq!(status_of(&board, "3"), Some(LeagueStatus::PostDraft));
    }

    #[test]
    fn reorder_self_target_is_noop() {
        let mut board = board_with(&["1", "2"], &[]);
        let snapshot = board.clone();
        assert!(!board.reorder(BoardList::Active, "1", "1"));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn reorder_unknown_id_is_noop() {
        let mut board = board_with(&["1", "2"], &[]);
        let snapshot = board.clone();
        assert!(!board.reorder(BoardList::Active, "9", "1"));
        assert!(!board.reorder(BoardList::Active, "1", "9"));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn reorder_works_in_archived_list() {
        let mut board = board_with(&[], &["7", "8", "9"]);
        assert!(board.reorder(BoardList::Archived, "9", "7"));
        assert_eq!(ids(&board.archived), ["9", "7", "8"]);
    }

    #[test]
    fn archive_appends_with_archived_status() {
        // Scenario: active [1..5], drop "1" on the archive zone
        let mut board = board_with(&["1", "2", "3", "4", "5"], &[]);
        let action = board.handle_drop("1", Some(ARCHIVE_ZONE_ID));
        assert_eq!(action, DropAction::Archive("1".to_string()));
        assert_eq!(ids(&board.active), ["2", "3", "4", "5"]);
        assert_eq!(ids(&board.archived), ["1"]);
        assert_eq!(board.archived[0].status, LeagueStatus::Archived);
    }

    #[test]
    fn archive_of_non_active_id_is_noop() {
        let mut board = board_with(&["1"], &["2"]);
        let snapshot = board.clone();
        assert!(!board.archive("2"));
        assert!(!board.archive("9"));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn unarchive_appends_with_post_draft_status() {
        let mut board = board_with(&["1", "2"], &["5"]);
        assert!(board.unarchive("5"));
        assert!(board.archived.is_empty());
        assert_eq!(ids(&board.active), ["1", "2", "5"]);
        assert_eq!(board.active[2].status, LeagueStatus::PostDraft);
    }

    #[test]
    fn unarchive_of_unknown_id_is_noop() {
        let mut board = board_with(&["1"], &[]);
        let snapshot = board.clone();
        assert!(!board.unarchive("1"));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn archive_then_unarchive_restores_membership_not_position() {
        let mut board = board_with(&["1", "2", "3"], &[]);
        board.archive("1");
        board.unarchive("1");
        // Set-equal to the original active list, but "1" re-enters at the end
        assert_eq!(ids(&board.active), ["2", "3", "1"]);
        assert!(board.archived.is_empty());
        assert_eq!(board.active[2].status, LeagueStatus::PostDraft);
    }

    #[test]
    fn drop_with_no_target_is_ignored() {
        let mut board = board_with(&["1", "2"], &[]);
        let snapshot = board.clone();
        assert_eq!(board.handle_drop("1", None), DropAction::Ignore);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn drop_on_self_is_ignored() {
        // Scenario: active [1,2], drop "1" on "1"
        let mut board = board_with(&["1", "2"], &[]);
        let snapshot = board.clone();
        assert_eq!(board.handle_drop("1", Some("1")), DropAction::Ignore);
        assert_eq!(ids(&board.active), ["1", "2"]);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn drop_on_active_container_is_ignored() {
        let mut board = board_with(&["1", "2"], &[]);
        let snapshot = board.clone();
        assert_eq!(board.handle_drop("1", Some(ACTIVE_ZONE_ID)), DropAction::Ignore);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn archive_zone_wins_over_reorder() {
        // Even a league whose own id matched nothing else must not fall
        // through to reorder when the target is the archive zone.
        let board = board_with(&["1", "2"], &[]);
        assert_eq!(
            board.classify_drop("2", Some(ARCHIVE_ZONE_ID)),
            DropAction::Archive("2".to_string())
        );
    }

    #[test]
    fn archive_zone_drop_of_archived_league_is_ignored() {
        let mut board = board_with(&["1"], &["2"]);
        let snapshot = board.clone();
        assert_eq!(board.handle_drop("2", Some(ARCHIVE_ZONE_ID)), DropAction::Ignore);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn cross_list_drop_is_ignored() {
        // moved active, target archived (and vice versa) match no rule
        let mut board = board_with(&["1"], &["2"]);
        let snapshot = board.clone();
        assert_eq!(board.handle_drop("1", Some("2")), DropAction::Ignore);
        assert_eq!(board.handle_drop("2", Some("1")), DropAction::Ignore);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn classify_routes_archived_reorders() {
        let mut board = board_with(&["1"], &["8", "9"]);
        let action = board.handle_drop("9", Some("8"));
        assert_eq!(
            action,
            DropAction::ReorderArchived {
                moved: "9".to_string(),
                target: "8".to_string(),
            }
        );
        assert_eq!(ids(&board.archived), ["9", "8"]);
    }

    #[test]
    fn lists_never_share_an_id() {
        let mut board = board_with(&["1", "2", "3", "4", "5"], &[]);
        board.handle_drop("2", Some(ARCHIVE_ZONE_ID));
        board.handle_drop("4", Some(ARCHIVE_ZONE_ID));
        board.handle_drop("1", Some("5"));
        board.handle_drop("4", Some("2"));
        board.unarchive("2");
        board.handle_drop("2", Some(ARCHIVE_ZONE_ID));

        for league in &board.active {
            assert!(
                !board.archived.iter().any(|a| a.id == league.id),
                "id {} present in both lists",
                league.id
            );
        }
        let total = board.active.len() + board.archived.len();
        assert_eq!(total, 5);
    }
}
