//! Tracking core: response normalization and the pure search state machine.
mod detail;
mod effect;
mod i18n;
mod locale;
mod msg;
mod normalize;
mod state;
mod update;
mod view_model;

pub use detail::{
    CargoSummary, DriverInfo, DriverPosition, GeoPoint, PartyAddress, ShipmentDetail, StatusEvent,
};
pub use effect::Effect;
pub use i18n::{Localizer, MessageKey};
pub use locale::{localize_path, Locale, UnknownLocale, SUPPORTED_LOCALES};
pub use msg::Msg;
pub use normalize::{
    address_text, normalize, DetailRecord, NormalizedResult, RawTrackingResponse, ReferenceRecord,
    ResponseStatus, STATUS_OK, UNRECOGNIZED_STATUS,
};
pub use state::{
    AppState, PendingSearch, SearchFailure, SearchId, SearchOrigin, SearchPhase, QUERY_PARAM,
};
pub use update::update;
pub use view_model::{AppViewModel, FailureView, ResultView, SchoolField, SearchStatusView};
