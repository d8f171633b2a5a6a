/// Global actions - like Redux actions
///
/// All state changes in the application happen through actions, dispatched
/// from key events. Invalid actions (past day, booked slot, premature
/// confirm) are silent no-ops in the reducer; nothing is signaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Month navigation - allowed in any state, never touches the selection
    MonthPrev,
    MonthNext,

    // Cursor movement within the focused pane
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,

    /// Tab: toggle between the calendar and slot panes
    /// (the slot pane is only reachable once a date is selected)
    TogglePane,

    /// Enter on the calendar pane: select the day under the cursor
    SelectDay,

    /// Enter on the slot pane: select the slot under the cursor
    SelectSlot,

    /// Book the appointment (requires both date and time)
    Confirm,

    // System actions
    Quit,
}

impl Action {
    /// Returns true if this action should trigger an immediate re-render
    pub fn should_render(&self) -> bool {
        !matches!(self, Self::Quit)
    }
}
