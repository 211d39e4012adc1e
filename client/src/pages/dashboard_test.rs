use super::*;

use crate::state::records::WidgetBests;
use engine::GameRecord;

#[test]
fn fresh_records_show_no_badges() {
    let records = RecordsState::default();
    assert_eq!(memory_badge_label(&records), None);
    assert_eq!(hue_badge_label(&records), None);
    assert_eq!(focus_badge_label(&records), None);
}

#[test]
fn memory_badge_includes_score_and_round() {
    let records = RecordsState {
        memory: GameRecord { best_round: 6, best_score: 30 },
        ..RecordsState::default()
    };
    assert_eq!(memory_badge_label(&records), Some("Best 30 pts, round 6".to_owned()));
}

#[test]
fn hue_badge_formats_percentage() {
    let records = RecordsState {
        widgets: WidgetBests { hue_score: 88, focus_sessions: 0 },
        ..RecordsState::default()
    };
    assert_eq!(hue_badge_label(&records), Some("Best match 88%".to_owned()));
}

#[test]
fn focus_badge_pluralizes() {
    let mut records = RecordsState::default();
    records.widgets.focus_sessions = 1;
    assert_eq!(focus_badge_label(&records), Some("1 session done".to_owned()));
    records.widgets.focus_sessions = 3;
    assert_eq!(focus_badge_label(&records), Some("3 sessions done".to_owned()));
}
