use super::{HistoryError, HistoryTable, HistoryTrigger};

/// What the user is told when a history cannot be shown. Details go to the
/// log, not to the user.
pub const GENERIC_FAILURE_NOTICE: &str =
    "Something went wrong while showing the history. Check the log for details.";

/// Where a click inside the open dialog landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed background around the panel
    Overlay,
    /// The panel itself, or anything inside it
    Panel,
}

/// State of the history dialog: closed, or open showing one table.
#[derive(Debug, Default)]
pub struct HistoryModal {
    table: Option<HistoryTable>,
    notice: Option<String>,
}

impl HistoryModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.table.is_some()
    }

    pub fn table(&self) -> Option<&HistoryTable> {
        self.table.as_ref()
    }

    /// The failure notice waiting to be shown, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Parses the trigger's attributes and opens the dialog on success.
    ///
    /// Never fails outward: a parse error is logged together with the raw
    /// attributes, the dialog stays closed with an empty body, and the
    /// generic notice is raised. Returns whether the dialog opened.
    pub fn open(&mut self, trigger: &HistoryTrigger) -> bool {
        let mut scope = RenderScope::begin(self);
        match HistoryTable::from_trigger(trigger) {
            Ok(table) => {
                scope.commit(table);
                true
            }
            Err(err) => {
                scope.report(&err, trigger);
                false
            }
        }
    }

    pub fn close(&mut self) {
        if self.table.take().is_some() {
            log::debug!("history dialog closed");
        }
    }

    /// Only a click on the background dismisses the dialog.
    pub fn on_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Overlay {
            self.close();
        }
    }
}

/// Guards one render of the dialog. The body is cleared on entry, and unless
/// a table is committed the dialog is left closed when the scope ends, on
/// every exit path.
struct RenderScope<'a> {
    modal: &'a mut HistoryModal,
    committed: bool,
}

impl<'a> RenderScope<'a> {
    fn begin(modal: &'a mut HistoryModal) -> Self {
        modal.table = None;
        modal.notice = None;
        Self {
            modal,
            committed: false,
        }
    }

    fn commit(&mut self, table: HistoryTable) {
        log::debug!("history dialog opened: {} ({} rows)", table.title, table.rows.len());
        self.modal.table = Some(table);
        self.committed = true;
    }

    fn report(&mut self, err: &HistoryError, trigger: &HistoryTrigger) {
        log::error!(
            "failed to show history {:?}: {err}; headers attribute: {:?}; history attribute: {:?}",
            trigger.title,
            trigger.headers,
            trigger.history,
        );
        self.modal.notice = Some(GENERIC_FAILURE_NOTICE.to_owned());
    }
}

impl Drop for RenderScope<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.modal.table = None;
        }
    }
}
