use cornerbadge_engine::coords::Vec2;

/// Host notifications routed to widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The widget's viewport changed from `old_size` to `size`.
    ///
    /// Delivered before the first draw with the new size. The first
    /// notification after creation has `old_size == Vec2::zero()`.
    SizeChanged { size: Vec2, old_size: Vec2 },
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled: stop routing.
    Consumed,
    /// Event was not handled: keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
