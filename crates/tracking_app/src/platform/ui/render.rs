use tracking_core::{
    AppViewModel, FailureView, Localizer, MessageKey, ResultView, SearchStatusView,
    ShipmentDetail, StatusEvent,
};

use super::dates::format_timestamp;

const DASH: &str = "-";

pub fn render(view: &AppViewModel, localizer: &Localizer) -> Vec<String> {
    let t = |key| localizer.text(key);
    let mut lines = Vec::new();

    match &view.status {
        SearchStatusView::Idle => {
            lines.push(heading(t(MessageKey::EmptyTitle)));
            lines.push(t(MessageKey::EmptyHint).to_string());
        }
        SearchStatusView::Loading => {
            lines.push(format!("{} [{}]", t(MessageKey::Loading), view.input.trim()));
        }
        SearchStatusView::Failed(FailureView::NotFound { server_message }) => {
            let text = match server_message {
                Some(message) => format!("{} ({message})", t(MessageKey::NotFound)),
                None => t(MessageKey::NotFound).to_string(),
            };
            lines.push(format!("! {text}"));
        }
        SearchStatusView::Failed(FailureView::Transport) => {
            lines.push(format!("! {}", t(MessageKey::FetchFailed)));
        }
        SearchStatusView::Results(ResultView::Detail(detail)) => {
            render_detail(&mut lines, detail, localizer);
        }
        SearchStatusView::Results(ResultView::References(labels)) => {
            lines.push(heading(t(MessageKey::ReferenceTitle)));
            lines.extend(labels.iter().map(|label| format!("  - {label}")));
        }
        SearchStatusView::Results(ResultView::School(fields)) => {
            lines.push(heading(t(MessageKey::SchoolTitle)));
            lines.extend(
                fields
                    .iter()
                    .map(|field| format!("  {}: {}", field.key, field.value)),
            );
        }
    }

    lines
}

fn heading(title: &str) -> String {
    format!("== {title} ==")
}

fn row(label: &str, value: Option<&str>, placeholder: &str) -> String {
    format!("{label}: {}", value.unwrap_or(placeholder))
}

fn render_detail(lines: &mut Vec<String>, detail: &ShipmentDetail, localizer: &Localizer) {
    let t = |key| localizer.text(key);

    lines.push(heading(t(MessageKey::DetailTitle)));
    lines.push(row(
        t(MessageKey::TrackingNumber),
        detail.tracking_number.as_deref(),
        DASH,
    ));
    lines.push(row(
        t(MessageKey::OrderNumber),
        detail.order_number.as_deref(),
        DASH,
    ));
    lines.push(row(t(MessageKey::Customer), detail.customer.as_deref(), DASH));
    lines.push(row(t(MessageKey::Notes), detail.notes.as_deref(), DASH));

    lines.push(format!(
        "{}: {} / {}",
        t(MessageKey::Origin),
        detail.origin.pic.as_deref().unwrap_or(DASH),
        detail.origin.address.as_deref().unwrap_or(DASH)
    ));
    lines.push(format!(
        "{}: {} / {}",
        t(MessageKey::Destination),
        detail.destination.pic.as_deref().unwrap_or(DASH),
        detail
            .destination
            .address
            .as_deref()
            .unwrap_or(t(MessageKey::NotAvailable))
    ));
    lines.push(format!("{}: {}", t(MessageKey::Cargo), detail.cargo.summary()));

    lines.push(row(t(MessageKey::DriverName), detail.driver.name.as_deref(), DASH));
    lines.push(row(t(MessageKey::DriverPhone), detail.driver.phone.as_deref(), DASH));
    lines.push(row(
        t(MessageKey::VehicleType),
        detail.driver.vehicle_type.as_deref(),
        DASH,
    ));
    lines.push(row(t(MessageKey::Plate), detail.driver.plate.as_deref(), DASH));

    lines.push(match &detail.position.coordinates {
        Some(point) => format!("{}: {}", t(MessageKey::Map), point.map_url()),
        None => t(MessageKey::MapUnavailable).to_string(),
    });
    lines.push(row(
        t(MessageKey::DriverLocation),
        detail.position.address.as_deref(),
        t(MessageKey::LocationUnavailable),
    ));
    lines.push(format!(
        "{}: {}",
        t(MessageKey::LastUpdate),
        format_timestamp(detail.position.last_update.as_deref(), localizer.locale())
    ));

    if !detail.history.is_empty() {
        lines.push(heading(t(MessageKey::HistoryTitle)));
        lines.extend(
            detail
                .history
                .iter()
                .map(|event| history_row(event, localizer)),
        );
    }
}

fn history_row(event: &StatusEvent, localizer: &Localizer) -> String {
    let t = |key| localizer.text(key);
    let status = match (&event.status, &event.description) {
        (Some(status), Some(description)) => format!("{status} ({description})"),
        (Some(status), None) => status.clone(),
        (None, Some(description)) => description.clone(),
        (None, None) => DASH.to_string(),
    };
    let photo = match &event.photo_url {
        Some(url) => format!("{}: {url}", t(MessageKey::Photo)),
        None => t(MessageKey::NoImage).to_string(),
    };
    format!(
        "  {} | {} | {} | {}",
        format_timestamp(event.date.as_deref(), localizer.locale()),
        status,
        event.memo.as_deref().unwrap_or(t(MessageKey::NoMemo)),
        photo
    )
}
