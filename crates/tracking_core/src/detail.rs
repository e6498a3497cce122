//! Defensive projection of a [`DetailRecord`] into display fields.
//!
//! Every field is optional; the renderer decides which placeholder to show.

use serde_json::Value;

use crate::normalize::{address_text, scalar_text, truthy_coordinate, DetailRecord};

/// Photo URLs containing this marker are the backend's "no picture" stand-in.
const NO_PICTURE_MARKER: &str = "no-pictures";

#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentDetail {
    pub tracking_number: Option<String>,
    pub order_number: Option<String>,
    pub customer: Option<String>,
    pub notes: Option<String>,
    pub origin: PartyAddress,
    pub destination: PartyAddress,
    pub cargo: CargoSummary,
    pub driver: DriverInfo,
    pub position: DriverPosition,
    pub history: Vec<StatusEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartyAddress {
    pub pic: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CargoSummary {
    pub ikat: Option<String>,
    pub koli: Option<String>,
    pub qty: Option<String>,
    pub berat: Option<String>,
}

impl CargoSummary {
    /// `ikat/koli/qty/berat`, with `-` for each missing count.
    pub fn summary(&self) -> String {
        [&self.ikat, &self.koli, &self.qty, &self.berat]
            .iter()
            .map(|value| value.as_deref().unwrap_or("-"))
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriverInfo {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub vehicle_type: Option<String>,
    pub plate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DriverPosition {
    /// Present only when latitude and longitude are both truthy.
    pub coordinates: Option<GeoPoint>,
    pub address: Option<String>,
    pub last_update: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps?q={},{}&z=15",
            self.latitude, self.longitude
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusEvent {
    pub date: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub memo: Option<String>,
    pub photo_url: Option<String>,
}

impl ShipmentDetail {
    pub fn from_record(record: &DetailRecord) -> Self {
        let position = record.get("positionDriverNow");
        Self {
            tracking_number: record.text("msm"),
            order_number: record.text("sp"),
            customer: record.text("customer"),
            notes: record.text("keterangan"),
            origin: party_address(record.get("alamatMuat")),
            destination: party_address(record.get("alamatBongkar")),
            cargo: CargoSummary {
                ikat: record.text("ikat"),
                koli: record.text("koli"),
                qty: record.text("qty"),
                berat: record.text("berat"),
            },
            driver: DriverInfo {
                name: record.text("driver"),
                phone: record.text("telp"),
                vehicle_type: record.text("jenisKendaraan"),
                plate: record.text("nopol"),
            },
            position: DriverPosition {
                coordinates: position.and_then(geo_point),
                address: field(position, "address").and_then(address_text),
                last_update: field(position, "lastUpdate").and_then(scalar_text),
            },
            history: status_history(record.get("statusKendaraan")),
        }
    }
}

fn field<'a>(parent: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    parent.and_then(Value::as_object).and_then(|fields| fields.get(key))
}

fn party_address(value: Option<&Value>) -> PartyAddress {
    match value {
        Some(Value::Object(_)) => PartyAddress {
            pic: field(value, "pic").and_then(scalar_text),
            address: field(value, "alamat").and_then(address_text),
        },
        // Some payloads send the whole location as a bare string.
        Some(other) => PartyAddress {
            pic: None,
            address: address_text(other),
        },
        None => PartyAddress::default(),
    }
}

fn geo_point(position: &Value) -> Option<GeoPoint> {
    let latitude = field(Some(position), "latitude").and_then(truthy_coordinate)?;
    let longitude = field(Some(position), "longitude").and_then(truthy_coordinate)?;
    Some(GeoPoint {
        latitude,
        longitude,
    })
}

fn status_history(value: Option<&Value>) -> Vec<StatusEvent> {
    let Some(events) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    events
        .iter()
        .filter(|event| event.is_object())
        .map(|event| {
            let event = Some(event);
            StatusEvent {
                date: field(event, "date").and_then(scalar_text),
                status: field(event, "status").and_then(scalar_text),
                description: field(event, "keterangan").and_then(scalar_text),
                memo: field(event, "memo").and_then(scalar_text),
                photo_url: field(event, "foto")
                    .and_then(scalar_text)
                    .filter(|url| !url.contains(NO_PICTURE_MARKER)),
            }
        })
        .collect()
}
