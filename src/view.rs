use crate::CalendarDate;
use crate::cell::DateCell;
use crate::config::ViewConfig;
use crate::consts::DAYS_PER_WEEK;
use crate::gesture::{GestureClassifier, PointerEvent};
use crate::grid::{Grid, GridBuilder, GridError, week_of_month};
use crate::listener::{Container, Listeners};
use crate::lunar::{LunarConverter, NoLunar};
use crate::render::{self, GridLayout, Renderer};
use crate::scheme::{SchemeSet, merge};
use crate::selection::{Selection, resolve_from_coordinate};
use std::fmt;

/// One calendar widget: the current grid, its selection, and the wiring to
/// the host.
///
/// All methods take `&mut self`, so a draw never sees a grid halfway through
/// a rebuild. A rebuild builds the new grid off to the side and swaps it in.
pub struct GridView<L = NoLunar> {
    config: ViewConfig,
    builder: GridBuilder,
    lunar: L,
    grid: Grid,
    selection: Selection,
    schemes: Option<SchemeSet>,
    gesture: GestureClassifier,
    listeners: Listeners,
    container: Option<Box<dyn Container>>,
    layout: GridLayout,
    today: Option<CalendarDate>,
    needs_redraw: bool,
}

impl<L: LunarConverter> GridView<L> {
    pub fn new(config: ViewConfig, lunar: L) -> Self {
        let layout = GridLayout {
            width: 0.0,
            item_height: config.item_height,
            padding_left: config.padding_left_px(),
            padding_right: config.padding_right_px(),
        };
        Self {
            builder: GridBuilder::new(config.granularity, config.first_day_of_week),
            gesture: GestureClassifier::new(config.click_threshold_px()),
            config,
            lunar,
            grid: Grid::default(),
            selection: Selection::default(),
            schemes: None,
            listeners: Listeners::default(),
            container: None,
            layout,
            today: None,
            needs_redraw: false,
        }
    }

    pub const fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    pub const fn layout(&self) -> &GridLayout {
        &self.layout
    }

    pub fn selected_cell(&self) -> Option<&DateCell> {
        self.selection.index().and_then(|i| self.grid.get(i))
    }

    /// Index of `date` in the current grid
    pub fn selected_index(&self, date: CalendarDate) -> Option<usize> {
        self.grid.position(date)
    }

    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    pub fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    pub fn set_container(&mut self, container: impl Container + 'static) {
        self.container = Some(Box::new(container));
    }

    pub fn clear_container(&mut self) {
        self.container = None;
    }

    /// Sets the full view width in pixels, padding included.
    pub fn set_width(&mut self, width: f32) {
        self.layout.width = width;
    }

    pub fn set_item_height(&mut self, item_height: f32) {
        self.layout.item_height = item_height;
    }

    /// Day to flag as today. Takes effect on the next rebuild.
    pub fn set_today(&mut self, today: Option<CalendarDate>) {
        self.today = today;
    }

    /// Replaces the grid with the one around `reference`.
    ///
    /// The stored schemes are merged into the new grid and the selection
    /// follows its date into it, or is cleared if the date is gone.
    ///
    /// # Errors
    /// Returns `GridError` when the grid cannot be built; the previous grid
    /// and selection are kept.
    pub fn rebuild(&mut self, reference: CalendarDate) -> Result<(), GridError> {
        let mut grid = match self.builder.build(reference, &self.lunar, self.today) {
            Ok(grid) => grid,
            Err(err) => {
                tracing::warn!(%reference, %err, "rebuild failed, keeping previous grid");
                return Err(err);
            }
        };
        merge(&mut grid, self.schemes.as_ref(), self.config.default_scheme_color);

        self.grid = grid;
        let carried = self.selection.carry_over(&self.grid);
        tracing::debug!(%reference, selection = ?carried, "rebuilt view");
        self.request_redraw();
        Ok(())
    }

    /// Stores `schemes` and merges them into the current grid.
    pub fn apply_schemes(&mut self, schemes: Option<SchemeSet>) {
        self.schemes = schemes;
        merge(
            &mut self.grid,
            self.schemes.as_ref(),
            self.config.default_scheme_color,
        );
        self.request_redraw();
    }

    /// Points the selection at `date` without notifying anyone.
    pub fn set_selected_calendar(&mut self, date: CalendarDate) -> Option<usize> {
        let index = self.selection.select_date(&self.grid, date);
        self.needs_redraw = true;
        index
    }

    /// Selects the first cell and runs the full notification chain.
    pub fn perform_initial_selection(&mut self) -> bool {
        self.select(0)
    }

    /// Selects `index` and runs the full notification chain. Out-of-range
    /// indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        let previous = self.selection.date();
        if !self.selection.select(&self.grid, index) {
            return false;
        }
        let Some(cell) = self.grid.get(index) else {
            return false;
        };
        tracing::debug!(index, date = %cell.date(), "date selected");

        self.listeners.inner_selected(cell);
        if let Some(container) = self.container.as_mut() {
            container.notify_scope_selected(week_of_month(
                cell.date(),
                self.builder.first_day_of_week(),
            ));
        }
        self.listeners.date_selected(cell);
        if previous != Some(cell.date()) {
            self.listeners.date_changed(previous, cell);
        }

        self.request_redraw();
        true
    }

    /// Feeds pointer input. A completed tap on a cell selects it; returns
    /// the selected index.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<usize> {
        let tap = self.gesture.handle(event)?;
        let index = resolve_from_coordinate(
            tap.x - self.layout.padding_left,
            tap.y,
            self.layout.cell_width(),
            self.layout.item_height,
            DAYS_PER_WEEK,
            self.grid.len(),
        )?;
        self.select(index).then_some(index)
    }

    /// Draws the current grid. Returns false when there was nothing to draw.
    pub fn draw<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> bool {
        let drawn = render::draw(&self.grid, &self.selection, &self.layout, renderer);
        self.needs_redraw = false;
        drawn
    }

    fn request_redraw(&mut self) {
        self.needs_redraw = true;
        self.listeners.redraw();
    }
}

impl<L> fmt::Debug for GridView<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridView")
            .field("config", &self.config)
            .field("reference", &self.grid.reference())
            .field("cells", &self.grid.len())
            .field("selection", &self.selection)
            .field("layout", &self.layout)
            .field("listeners", &self.listeners)
            .field("container", &self.container.is_some())
            .finish_non_exhaustive()
    }
}
