//! Mode and table selection.

use galaxy_model::{Mode, Multiplier, Table};

use crate::views::ModeView;

/// Which mode is active, which table is selected, and the active view.
///
/// Both selections are plain replacements. Switching modes builds a fresh
/// view; switching tables keeps the view and its local state.
#[derive(Debug)]
pub struct Router {
    selected_table: Table,
    view: ModeView,
}

impl Router {
    /// Start in the explore mode on `table`.
    pub fn new(table: Table) -> Self {
        Self {
            selected_table: table,
            view: ModeView::for_mode(Mode::default(), table),
        }
    }

    pub fn select_mode(&mut self, mode: Mode) {
        tracing::debug!(mode = mode.key(), "mode selected");
        self.view = ModeView::for_mode(mode, self.selected_table);
    }

    /// Select a mode by key. Unknown keys leave everything unchanged.
    pub fn select_mode_key(&mut self, key: &str) -> Option<Mode> {
        let mode = Mode::from_key(key)?;
        self.select_mode(mode);
        Some(mode)
    }

    pub fn select_table(&mut self, table: Table) {
        if table == self.selected_table {
            return;
        }
        tracing::debug!(%table, "table selected");
        self.selected_table = table;
        self.view.table_changed(table);
    }

    /// Pick a cell of the explore grid. The picked row becomes the selected
    /// table. Returns `false` outside the explore mode.
    pub fn pick(&mut self, row: Table, column: Multiplier) -> bool {
        let ModeView::Explore(view) = &mut self.view else {
            return false;
        };
        view.pick(row, column);
        self.select_table(row);
        true
    }

    pub fn active_mode(&self) -> Mode {
        self.view.mode()
    }

    pub fn selected_table(&self) -> Table {
        self.selected_table
    }

    pub fn view(&self) -> &ModeView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ModeView {
        &mut self.view
    }

    pub fn render(&self) -> String {
        self.view.render(self.selected_table)
    }
}
