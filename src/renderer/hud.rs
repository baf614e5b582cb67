//! Text HUD
//!
//! Renders each screen as a few lines of text. Lines are only written when they
//! change, so a 60Hz loop prints the running HUD about once a second.

use std::io::Write;
use std::time::Duration;

use super::{Frame, RenderSink};
use crate::sim::{EntityKind, Session};

/// Format elapsed time as `MM:SS`
pub fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// The text shown for a frame
pub fn hud_lines(frame: &Frame<'_>) -> Vec<String> {
    match frame {
        Frame::Start => vec![
            "Star Attack".to_string(),
            "Press any key to continue".to_string(),
        ],
        Frame::Instructions => vec![
            "Instructions".to_string(),
            "Move: Arrow Keys".to_string(),
            "Shoot: Spacebar".to_string(),
            "Goal: Survive and destroy enemies to score points!".to_string(),
            "Mega Baddie appears at 30s and 40s after defeat!".to_string(),
            "It shoots light blue projectiles and takes 10 hits!".to_string(),
            "Press any key to Start the Game".to_string(),
        ],
        Frame::Running(session) => {
            let mut line = format!(
                "Time: {}  Lives: {}  Score: {}  Enemies: {}",
                format_clock(session.elapsed),
                session.lives,
                session.score,
                enemy_count(session)
            );
            if let Some(mega) = &session.mega {
                line.push_str(&format!("  Mega: {} hp", mega.health));
            }
            vec![line]
        }
        Frame::GameOver { elapsed, score } => vec![
            "Game Over!".to_string(),
            format!("Time Survived: {}", format_clock(*elapsed)),
            format!("Final Score: {}", score),
            "Press R to Restart or Q to Quit".to_string(),
        ],
    }
}

/// Baddies plus the mega, if one is alive
fn enemy_count(session: &Session) -> usize {
    session
        .entities()
        .filter(|e| matches!(e.kind, EntityKind::Baddie | EntityKind::MegaBaddie))
        .count()
}

/// Writes HUD text to any `io::Write`
pub struct HudRenderer<W: Write> {
    out: W,
    last: Vec<String>,
    failed: bool,
}

impl<W: Write> HudRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last: Vec::new(),
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) -> std::io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> RenderSink for HudRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) {
        let lines = hud_lines(frame);
        if lines == self.last || self.failed {
            return;
        }
        if let Err(e) = self.write_lines(&lines) {
            log::warn!("HUD output failed, disabling: {}", e);
            self.failed = true;
        }
        self.last = lines;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::config::GameConfig;
    use crate::sim::{Baddie, MegaBaddie};

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::ZERO), "00:00");
        assert_eq!(format_clock(Duration::from_millis(59_999)), "00:59");
        assert_eq!(format_clock(Duration::from_secs(754)), "12:34");
    }

    #[test]
    fn test_game_over_summary() {
        let lines = hud_lines(&Frame::GameOver {
            elapsed: Duration::from_secs(95),
            score: 140,
        });
        assert_eq!(lines[1], "Time Survived: 01:35");
        assert_eq!(lines[2], "Final Score: 140");
    }

    #[test]
    fn test_only_writes_changes() {
        let config = GameConfig::default();
        let mut session = Session::new(&config);
        let mut hud = HudRenderer::new(Vec::new());

        hud.render(&Frame::Running(&session));
        session.elapsed = Duration::from_millis(500);
        hud.render(&Frame::Running(&session));
        session.elapsed = Duration::from_secs(1);
        hud.render(&Frame::Running(&session));

        let text = String::from_utf8(hud.into_inner()).unwrap();
        assert_eq!(
            text,
            "Time: 00:00  Lives: 3  Score: 0  Enemies: 0\n\
             Time: 00:01  Lives: 3  Score: 0  Enemies: 0\n"
        );
    }

    #[test]
    fn test_running_line_counts_enemies() {
        let config = GameConfig::default();
        let mut session = Session::new(&config);
        session.baddies.push(Baddie::new(100.0, &config));
        session.baddies.push(Baddie::new(300.0, &config));
        assert_eq!(
            hud_lines(&Frame::Running(&session)),
            vec!["Time: 00:00  Lives: 3  Score: 0  Enemies: 2"]
        );

        session.baddies.clear();
        let mega = MegaBaddie::new(Vec2::new(500.0, 100.0), Vec2::ONE, Duration::ZERO, &config);
        session.mega = Some(mega);
        assert_eq!(
            hud_lines(&Frame::Running(&session)),
            vec!["Time: 00:00  Lives: 3  Score: 0  Enemies: 1  Mega: 10 hp"]
        );
    }
}
