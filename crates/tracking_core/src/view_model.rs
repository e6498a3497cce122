use crate::detail::ShipmentDetail;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub submit_enabled: bool,
    pub status: SearchStatusView,
    pub location: Option<String>,
}

impl AppViewModel {
    pub fn has_searched(&self) -> bool {
        self.status != SearchStatusView::Idle
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchStatusView {
    #[default]
    Idle,
    Loading,
    Results(ResultView),
    Failed(FailureView),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Detail(Box<ShipmentDetail>),
    References(Vec<String>),
    School(Vec<SchoolField>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolField {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureView {
    NotFound { server_message: Option<String> },
    Transport,
}
