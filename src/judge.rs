//! Per-frame scoring and collision rules, run after both entities moved.

use crate::obstacle::Obstacle;
use crate::player::Player;

/// What happened this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verdict {
    pub scored: bool,
    pub collided: bool,
}

/// Scores a pass at most once per obstacle cycle and reports whether the run
/// is over. `hit_boundary` is the result of this frame's `Player::update`.
pub fn judge(player: &mut Player, obstacle: &mut Obstacle, hit_boundary: bool) -> Verdict {
    let mut verdict = Verdict::default();

    if obstacle.right() < player.x() && !obstacle.passed {
        player.score += 1;
        obstacle.passed = true;
        verdict.scored = true;
    }

    let bbox = player.bounding_box();
    let (top, bottom) = obstacle.bounding_rects();
    verdict.collided = hit_boundary || bbox.intersects(&top) || bbox.intersects(&bottom);

    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup() -> (Player, Obstacle) {
        let cfg = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        (Player::new(&cfg), Obstacle::new(&cfg, &mut rng))
    }

    #[test]
    fn far_obstacle_is_harmless() {
        let (mut p, mut o) = setup();
        assert_eq!(judge(&mut p, &mut o, false), Verdict::default());
        assert_eq!(p.score, 0);
    }

    #[test]
    fn boundary_flag_alone_is_a_collision() {
        let (mut p, mut o) = setup();
        let v = judge(&mut p, &mut o, true);
        assert!(v.collided);
        assert!(!v.scored);
    }

    #[test]
    fn overlapping_top_column_is_a_collision() {
        let (mut p, mut o) = setup();
        // Player spans y 200..235.
        o.x = 60.0;
        o.gap_y = 200;
        // top column 0..200 only touches the player
        assert!(!judge(&mut p, &mut o, false).collided);
        o.gap_y = 180;
        assert!(!judge(&mut p, &mut o, false).collided);
        o.gap_y = 201;
        assert!(judge(&mut p, &mut o, false).collided);
    }

    #[test]
    fn overlapping_bottom_column_is_a_collision() {
        let (mut p, mut o) = setup();
        o.x = 40.0;
        o.gap_y = 115;
        // gap 115..235, bottom column starts where the player ends
        assert!(!judge(&mut p, &mut o, false).collided);
        o.gap_y = 114;
        assert!(judge(&mut p, &mut o, false).collided);
    }

    #[test]
    fn column_passed_horizontally_is_not_a_collision() {
        let (mut p, mut o) = setup();
        o.gap_y = 80;
        o.x = 30.0; // 30..50 ends at the player's left edge
        assert!(!judge(&mut p, &mut o, false).collided);
    }

    #[test]
    fn pass_scores_once() {
        let (mut p, mut o) = setup();
        o.x = 29.0; // right edge 49 < 50
        assert!(judge(&mut p, &mut o, false).scored);
        assert!(!judge(&mut p, &mut o, false).scored);
        assert_eq!(p.score, 1);
        assert!(o.passed);
    }

    #[test]
    fn right_edge_level_with_player_does_not_score() {
        let (mut p, mut o) = setup();
        o.x = 30.0; // right edge 50 == player x
        assert!(!judge(&mut p, &mut o, false).scored);
        assert_eq!(p.score, 0);
    }
}
