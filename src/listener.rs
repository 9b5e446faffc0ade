use crate::CalendarDate;
use crate::cell::DateCell;
use std::fmt;

pub type DateCallback = Box<dyn FnMut(&DateCell)>;
/// Receives the previously selected date (if any) and the newly selected cell.
pub type DateChangeCallback = Box<dyn FnMut(Option<CalendarDate>, &DateCell)>;
pub type RedrawCallback = Box<dyn FnMut()>;

/// The layout that hosts a grid view and switches between its periods.
pub trait Container {
    /// A day in week row `scope` of its month was selected.
    fn notify_scope_selected(&mut self, scope: usize);
}

impl<F> Container for F
where
    F: FnMut(usize),
{
    fn notify_scope_selected(&mut self, scope: usize) {
        self(scope);
    }
}

/// Optional callbacks a host registers on a view.
///
/// Each slot is independent; an empty slot makes the matching notification a
/// no-op.
#[derive(Default)]
pub struct Listeners {
    inner_selected: Option<DateCallback>,
    date_selected: Option<DateCallback>,
    date_changed: Option<DateChangeCallback>,
    redraw: Option<RedrawCallback>,
}

impl Listeners {
    /// Internal coordination hook, fired first on every selection
    pub fn set_inner_selected(&mut self, callback: impl FnMut(&DateCell) + 'static) {
        self.inner_selected = Some(Box::new(callback));
    }

    pub fn set_date_selected(&mut self, callback: impl FnMut(&DateCell) + 'static) {
        self.date_selected = Some(Box::new(callback));
    }

    pub fn set_date_changed(
        &mut self,
        callback: impl FnMut(Option<CalendarDate>, &DateCell) + 'static,
    ) {
        self.date_changed = Some(Box::new(callback));
    }

    pub fn set_redraw(&mut self, callback: impl FnMut() + 'static) {
        self.redraw = Some(Box::new(callback));
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn inner_selected(&mut self, cell: &DateCell) {
        if let Some(callback) = self.inner_selected.as_mut() {
            callback(cell);
        }
    }

    pub(crate) fn date_selected(&mut self, cell: &DateCell) {
        if let Some(callback) = self.date_selected.as_mut() {
            callback(cell);
        }
    }

    pub(crate) fn date_changed(&mut self, previous: Option<CalendarDate>, cell: &DateCell) {
        if let Some(callback) = self.date_changed.as_mut() {
            callback(previous, cell);
        }
    }

    pub(crate) fn redraw(&mut self) {
        if let Some(callback) = self.redraw.as_mut() {
            callback();
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("inner_selected", &self.inner_selected.is_some())
            .field("date_selected", &self.date_selected.is_some())
            .field("date_changed", &self.date_changed.is_some())
            .field("redraw", &self.redraw.is_some())
            .finish()
    }
}
