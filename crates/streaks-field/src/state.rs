//! Drawing the current streak set.

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use streaks_core::ColorTheme;

use crate::chars::arrow_for;
use crate::color::rotation_to_color;
use crate::element::{ElementSet, PlacedElement};

/// Renders the shared streak set as the frame background.
#[derive(Debug, Clone)]
pub struct FieldState {
    elements: ElementSet,
    /// Flip transition length in milliseconds.
    transition_ms: u64,
    theme: ColorTheme,
}

impl FieldState {
    pub fn new(elements: ElementSet, transition_ms: u64, theme: ColorTheme) -> Self {
        Self {
            elements,
            transition_ms,
            theme,
        }
    }

    /// Render the background to the frame.
    pub fn render(&self, frame: &mut Frame, elapsed_ms: u64) {
        let area = frame.area();
        let lines = self.lines(area.width, area.height, elapsed_ms);
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Build one line per terminal row with every visible streak in place.
    pub fn lines(&self, width: u16, height: u16, elapsed_ms: u64) -> Vec<Line<'static>> {
        let mut cells: Vec<Option<Span<'static>>> = vec![None; width as usize * height as usize];

        self.elements.with_elements(|elements| {
            for element in elements {
                let Some((col, row)) = cell_of(element, width, height) else {
                    continue;
                };
                cells[row * width as usize + col] = Some(self.render_element(element, elapsed_ms));
            }
        });

        cells
            .chunks(width.max(1) as usize)
            .take(height as usize)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|cell| cell.clone().unwrap_or_else(|| Span::raw(" ")))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn render_element(&self, element: &PlacedElement, elapsed_ms: u64) -> Span<'static> {
        let angle = element.displayed_rotation(elapsed_ms, self.transition_ms);
        let turning = angle != element.rotation;
        let color = rotation_to_color(angle, self.theme, turning);
        Span::styled(arrow_for(angle).to_string(), Style::new().fg(color))
    }
}

/// Terminal cell holding `element`, or `None` if it is off screen.
fn cell_of(element: &PlacedElement, width: u16, height: u16) -> Option<(usize, usize)> {
    if element.x < 0.0 || element.y < 0.0 {
        return None;
    }
    let col = element.x.floor() as usize;
    let row = element.y.floor() as usize;
    (col < width as usize && row < height as usize).then_some((col, row))
}
