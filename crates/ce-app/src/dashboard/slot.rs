/// Load status of one fetched state slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotStatus {
    /// Nothing requested since the last clear.
    #[default]
    Idle,
    Loading,
    Ready,
    /// The latest request failed; any previous data is still held.
    Failed(String),
}

/// Outcome of offering a completion to a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Completion {
    Applied,
    Failed(String),
    /// A newer request was issued (or the slot was cleared) after this one.
    Stale,
}

/// One remotely fetched state slice plus its request sequence counter.
///
/// Every request for the slice is tagged with the value returned by
/// [`Slot::begin`]; only the completion carrying the latest tag is applied.
#[derive(Debug, Clone)]
pub struct Slot<T> {
    data: Option<T>,
    status: SlotStatus,
    issued: u64,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: SlotStatus::Idle,
            issued: 0,
        }
    }
}

impl<T> Slot<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn status(&self) -> &SlotStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SlotStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SlotStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Sequence number of the most recently issued request.
    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    /// Issue a new request, keeping current data visible while it loads.
    pub(crate) fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.status = SlotStatus::Loading;
        self.issued
    }

    /// Drop current data and issue a new request.
    pub(crate) fn restart(&mut self) -> u64 {
        self.data = None;
        self.begin()
    }

    /// Drop data and invalidate anything in flight.
    pub(crate) fn clear(&mut self) {
        self.data = None;
        self.status = SlotStatus::Idle;
        self.issued += 1;
    }

    pub(crate) fn accept(&mut self, seq: u64, result: Result<T, String>) -> Completion {
        if seq != self.issued || self.status != SlotStatus::Loading {
            return Completion::Stale;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.status = SlotStatus::Ready;
                Completion::Applied
            }
            Err(message) => {
                self.status = SlotStatus::Failed(message.clone());
                Completion::Failed(message)
            }
        }
    }
}
