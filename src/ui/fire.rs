//! Fire and ash drawings. Pure functions of state; nothing here touches the terminal.

use super::style;
use crate::ritual::IncineratorState;
use console::measure_text_width;

const BURNING_FRAMES: [[&str; 6]; 3] = [
    [
        "      '   .    *   ",
        "        (  )  (    ",
        "     )  ) (( ) )   ",
        "    (( (  )) (( )  ",
        "     )\\_))(/(_/(   ",
        "   ==============  ",
    ],
    [
        "    *    '    .    ",
        "      )   (  )     ",
        "     (( ) ) (( (   ",
        "    ) )(( (( ) ))  ",
        "     (\\_)(\\)_/)    ",
        "   ==============  ",
    ],
    [
        "     .   *     '   ",
        "       (  ) )      ",
        "    ( )) (( ( )    ",
        "     (( )) ) (( (  ",
        "     )\\(_/)_(/(    ",
        "   ==============  ",
    ],
];

const BANKED_FIRE: [&str; 6] = [
    "                   ",
    "                   ",
    "         (         ",
    "        ) )  (     ",
    "     _(\\_)(_/)_    ",
    "   ==============  ",
];

const ASH_WIDTH: usize = 44;

/// Plain fire drawing for `state`. `frame` only matters while burning.
pub fn fire_lines(state: IncineratorState, frame: usize) -> Vec<&'static str> {
    match state {
        IncineratorState::Burning => BURNING_FRAMES[frame % BURNING_FRAMES.len()].to_vec(),
        IncineratorState::Idle | IncineratorState::Cooling => BANKED_FIRE.to_vec(),
    }
}

/// Coloured fire: bright while burning, dim embers otherwise.
pub fn render_fire(state: IncineratorState, frame: usize) -> String {
    let lines = fire_lines(state, frame);
    let last = lines.len().saturating_sub(1);
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| match (state, i) {
            (_, i) if i == last => style::dim(line),
            (IncineratorState::Burning, 0 | 1) => style::ember(line),
            (IncineratorState::Burning, _) => style::flame(line),
            _ => style::glow(line),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Greedy word wrap by display width, so Hangul counts double.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate_width = if current.is_empty() {
                measure_text_width(word)
            } else {
                measure_text_width(&current) + 1 + measure_text_width(word)
            };
            if candidate_width > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}

/// Plain framed reply, centred between quote marks.
pub fn ash_lines(text: &str) -> Vec<String> {
    let mut lines = vec![format!("{:^width$}", "❝", width = ASH_WIDTH)];
    for line in wrap(text.trim(), ASH_WIDTH) {
        let pad = ASH_WIDTH.saturating_sub(measure_text_width(&line)) / 2;
        lines.push(format!("{}{line}", " ".repeat(pad)));
    }
    lines.push(format!("{:^width$}", "❞", width = ASH_WIDTH));
    lines.push(format!("{:^width$}", ".  .  .", width = ASH_WIDTH));
    lines
}

pub fn render_ashes(text: &str) -> String {
    ash_lines(text)
        .into_iter()
        .map(style::ash)
        .collect::<Vec<_>>()
        .join("\n")
}
