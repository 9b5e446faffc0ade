use crate::cell::DateCell;
use crate::consts::DAYS_PER_WEEK;
use crate::grid::Grid;
use crate::selection::Selection;
use std::fmt;

/// Pixel geometry of a grid on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridLayout {
    pub width: f32,
    pub item_height: f32,
    pub padding_left: f32,
    pub padding_right: f32,
}

impl GridLayout {
    /// Width of one column; the padding is excluded.
    pub fn cell_width(&self) -> f32 {
        ((self.width - self.padding_left - self.padding_right) / DAYS_PER_WEEK as f32).max(0.0)
    }

    pub fn origin(&self, index: usize) -> CellOrigin {
        let column = index % DAYS_PER_WEEK;
        let row = index / DAYS_PER_WEEK;
        CellOrigin {
            x: (column as f32).mul_add(self.cell_width(), self.padding_left),
            y: row as f32 * self.item_height,
        }
    }
}

/// Top-left corner of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellOrigin {
    pub x: f32,
    pub y: f32,
}

/// Drawing hooks, called by [`draw`] in a fixed order:
///
/// 1. `on_preview_once_per_draw`
/// 2. for each cell, row by row and left to right:
///    `on_cell_origin_computed`, then
///    `on_draw_selected_background` if the cell is selected, otherwise
///    `on_draw_scheme_marker` if it has a scheme, then `on_draw_cell_text`.
///
/// Cells arrive fully enriched, lunar text and scheme included.
pub trait Renderer {
    /// Per-frame setup such as radii or text baselines.
    fn on_preview_once_per_draw(&mut self, _layout: &GridLayout) {}

    fn on_cell_origin_computed(&mut self, _origin: CellOrigin) {}

    fn on_draw_selected_background(&mut self, cell: &DateCell, origin: CellOrigin, has_scheme: bool);

    fn on_draw_scheme_marker(&mut self, cell: &DateCell, origin: CellOrigin);

    fn on_draw_cell_text(
        &mut self,
        cell: &DateCell,
        origin: CellOrigin,
        has_scheme: bool,
        is_selected: bool,
    );
}

/// Walks `grid` through `renderer`. Returns false, drawing nothing, for an
/// empty grid or a layout with no room for cells.
pub fn draw<R>(grid: &Grid, selection: &Selection, layout: &GridLayout, renderer: &mut R) -> bool
where
    R: Renderer + ?Sized,
{
    if grid.is_empty() || layout.cell_width() <= 0.0 {
        return false;
    }

    renderer.on_preview_once_per_draw(layout);
    for (index, cell) in grid.iter().enumerate() {
        let origin = layout.origin(index);
        renderer.on_cell_origin_computed(origin);

        let has_scheme = cell.has_scheme();
        let is_selected = selection.is_selected(index);
        if is_selected {
            renderer.on_draw_selected_background(cell, origin, has_scheme);
        } else if has_scheme {
            renderer.on_draw_scheme_marker(cell, origin);
        }
        renderer.on_draw_cell_text(cell, origin, has_scheme, is_selected);
    }
    true
}

/// Renders a grid as plain text, one line per week row.
///
/// Each cell shows its day number and lunar label. A scheme marker adds `*`,
/// the selected cell is bracketed and days outside the reference month are
/// parenthesised.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    rows: Vec<String>,
    row_y: Option<f32>,
    selected: bool,
    marked: bool,
}

impl TextRenderer {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl Renderer for TextRenderer {
    fn on_preview_once_per_draw(&mut self, _layout: &GridLayout) {
        self.rows.clear();
        self.row_y = None;
    }

    fn on_cell_origin_computed(&mut self, origin: CellOrigin) {
        if self.row_y != Some(origin.y) {
            self.rows.push(String::new());
            self.row_y = Some(origin.y);
        }
        self.selected = false;
        self.marked = false;
    }

    fn on_draw_selected_background(&mut self, _cell: &DateCell, _origin: CellOrigin, has_scheme: bool) {
        self.selected = true;
        self.marked = has_scheme;
    }

    fn on_draw_scheme_marker(&mut self, _cell: &DateCell, _origin: CellOrigin) {
        self.marked = true;
    }

    fn on_draw_cell_text(
        &mut self,
        cell: &DateCell,
        _origin: CellOrigin,
        _has_scheme: bool,
        _is_selected: bool,
    ) {
        let mut text = format!("{:>2}", cell.day());
        if !cell.lunar_text().is_empty() {
            text.push(' ');
            text.push_str(cell.lunar_text());
        }
        if self.marked {
            text.push('*');
        }
        if !cell.belongs_to_reference_period() {
            text = format!("({text})");
        }
        if self.selected {
            text = format!("[{text}]");
        }

        if let Some(row) = self.rows.last_mut() {
            if !row.is_empty() {
                row.push(' ');
            }
            row.push_str(&text);
        }
    }
}

impl fmt::Display for TextRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.join("\n"))
    }
}
