use pretty_assertions::assert_eq;
use serde_json::json;
use tracking_core::{DetailRecord, GeoPoint, PartyAddress, ShipmentDetail, StatusEvent};

fn detail(value: serde_json::Value) -> ShipmentDetail {
    ShipmentDetail::from_record(&DetailRecord::new(value))
}

#[test]
fn nested_address_record_renders_its_name() {
    let view = detail(json!({
        "msm": "X1",
        "positionDriverNow": {"address": {"name": "Warehouse A"}}
    }));

    assert_eq!(view.position.address.as_deref(), Some("Warehouse A"));
}

#[test]
fn full_record_is_projected() {
    let view = detail(json!({
        "msm": "SM-001",
        "sp": "SP-9",
        "customer": "PT Erlangga",
        "keterangan": "Dalam perjalanan",
        "ikat": 2,
        "koli": 10,
        "qty": 150,
        "berat": 12.5,
        "driver": "Budi",
        "telp": "0812",
        "jenisKendaraan": "CDD",
        "nopol": "B 1234 XY",
        "alamatMuat": {"alamat": "Gudang Ciracas", "pic": "Andi", "lat": 0, "long": 0},
        "alamatBongkar": {"alamat": {"formatted": "SDN 1 Bandung"}, "pic": "Sari"},
        "positionDriverNow": {
            "latitude": -6.2,
            "longitude": 106.8,
            "address": "Jl. Tol Cikampek KM 20",
            "lastUpdate": "2024-05-01 10:00:00"
        },
        "statusKendaraan": [
            {
                "status": "Muat",
                "keterangan": "Barang dimuat",
                "date": "2024-05-01 08:00:00",
                "foto": "https://cdn.example/foto1.jpg",
                "memo": null
            },
            {
                "status": "Jalan",
                "keterangan": "Berangkat",
                "date": "2024-05-01 09:00:00",
                "foto": "https://cdn.example/no-pictures.png",
                "memo": "Macet"
            }
        ]
    }));

    assert_eq!(view.tracking_number.as_deref(), Some("SM-001"));
    assert_eq!(view.order_number.as_deref(), Some("SP-9"));
    assert_eq!(view.cargo.summary(), "2/10/150/12.5");
    assert_eq!(
        view.origin,
        PartyAddress {
            pic: Some("Andi".to_string()),
            address: Some("Gudang Ciracas".to_string()),
        }
    );
    assert_eq!(view.destination.address.as_deref(), Some("SDN 1 Bandung"));
    assert_eq!(view.driver.plate.as_deref(), Some("B 1234 XY"));
    assert_eq!(
        view.position.coordinates,
        Some(GeoPoint {
            latitude: -6.2,
            longitude: 106.8
        })
    );
    assert_eq!(
        view.history,
        vec![
            StatusEvent {
                date: Some("2024-05-01 08:00:00".to_string()),
                status: Some("Muat".to_string()),
                description: Some("Barang dimuat".to_string()),
                memo: None,
                photo_url: Some("https://cdn.example/foto1.jpg".to_string()),
            },
            StatusEvent {
                date: Some("2024-05-01 09:00:00".to_string()),
                status: Some("Jalan".to_string()),
                description: Some("Berangkat".to_string()),
                memo: Some("Macet".to_string()),
                photo_url: None,
            },
        ]
    );
}

#[test]
fn missing_fields_never_fail() {
    let view = detail(json!({"msm": "X1"}));

    assert_eq!(view.tracking_number.as_deref(), Some("X1"));
    assert_eq!(view.origin, PartyAddress::default());
    assert_eq!(view.driver.name, None);
    assert_eq!(view.position.coordinates, None);
    assert_eq!(view.position.address, None);
    assert_eq!(view.cargo.summary(), "-/-/-/-");
    assert!(view.history.is_empty());
}

#[test]
fn map_requires_both_coordinates() {
    for position in [
        json!({"latitude": -6.2, "longitude": 0}),
        json!({"latitude": 0, "longitude": 106.8}),
        json!({"latitude": -6.2}),
        json!({"latitude": null, "longitude": null}),
    ] {
        let view = detail(json!({ "positionDriverNow": position }));
        assert_eq!(view.position.coordinates, None, "position {position}");
    }
}

#[test]
fn zero_coordinate_sent_as_text_still_maps() {
    let view = detail(json!({
        "positionDriverNow": {"latitude": "0", "longitude": "106.8"}
    }));

    assert_eq!(
        view.position.coordinates,
        Some(GeoPoint {
            latitude: 0.0,
            longitude: 106.8,
        })
    );
}

#[test]
fn non_object_record_degrades_to_empty_detail() {
    let view = detail(json!("just a string"));

    assert_eq!(view.tracking_number, None);
    assert!(view.history.is_empty());
}

#[test]
fn map_url_points_at_coordinates() {
    let point = GeoPoint {
        latitude: -6.2,
        longitude: 106.8,
    };
    assert_eq!(
        point.map_url(),
        "https://www.google.com/maps?q=-6.2,106.8&z=15"
    );
}
