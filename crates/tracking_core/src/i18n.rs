//! Message catalog for the tracking page.
//!
//! A [`Localizer`] is built once at startup for the resolved locale and handed
//! to whatever renders text. There is no global translation state.

use crate::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    PageTitle,
    InputPrompt,
    Loading,
    EmptyTitle,
    EmptyHint,
    NotFound,
    FetchFailed,
    DetailTitle,
    TrackingNumber,
    OrderNumber,
    Customer,
    Notes,
    Origin,
    Destination,
    Cargo,
    DriverName,
    DriverPhone,
    VehicleType,
    Plate,
    DriverLocation,
    LastUpdate,
    Map,
    MapUnavailable,
    LocationUnavailable,
    NotAvailable,
    HistoryTitle,
    NoMemo,
    Photo,
    NoImage,
    ReferenceTitle,
    SchoolTitle,
    ShareLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localizer {
    locale: Locale,
}

impl Localizer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn text(&self, key: MessageKey) -> &'static str {
        match self.locale {
            Locale::Id => indonesian(key),
            Locale::En => english(key),
        }
    }
}

fn indonesian(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        PageTitle => "Tracking Pengiriman",
        InputPrompt => "Masukkan nomor resi / surat jalan / faktur",
        Loading => "Memuat data tracking...",
        EmptyTitle => "Lacak Pengiriman Anda",
        EmptyHint => "Masukkan nomor resi, surat jalan, atau faktur untuk melacak paket Anda",
        NotFound => "Data tidak ditemukan",
        FetchFailed => "Gagal memuat data tracking",
        DetailTitle => "Detail Pengiriman",
        TrackingNumber => "No. Resi",
        OrderNumber => "No. Order",
        Customer => "Pelanggan",
        Notes => "Keterangan",
        Origin => "Alamat Asal",
        Destination => "Alamat Tujuan",
        Cargo => "Ikat/Koli/Qty/Berat",
        DriverName => "Nama Driver",
        DriverPhone => "No Telp Driver",
        VehicleType => "Jenis Kendaraan",
        Plate => "Nopol",
        DriverLocation => "Lokasi Driver Terkini",
        LastUpdate => "Update terakhir",
        Map => "Peta",
        MapUnavailable => "Map tidak tersedia",
        LocationUnavailable => "Lokasi tidak tersedia",
        NotAvailable => "Tidak tersedia",
        HistoryTitle => "History Pengiriman",
        NoMemo => "Tidak ada memo",
        Photo => "Foto",
        NoImage => "Tidak ada foto",
        ReferenceTitle => "Daftar Referensi",
        SchoolTitle => "Data Sekolah",
        ShareLink => "Tautan",
    }
}

fn english(key: MessageKey) -> &'static str {
    use MessageKey::*;
    match key {
        PageTitle => "Shipment Tracking",
        InputPrompt => "Enter waybill / delivery order / invoice number",
        Loading => "Loading tracking data...",
        EmptyTitle => "Track Your Shipment",
        EmptyHint => "Enter a waybill, delivery order or invoice number to track your package",
        NotFound => "Data not found",
        FetchFailed => "Failed to load tracking data",
        DetailTitle => "Detail of delivery",
        TrackingNumber => "Waybill No.",
        OrderNumber => "Order No.",
        Customer => "Customer",
        Notes => "Notes",
        Origin => "Origin Address",
        Destination => "Destination Address",
        Cargo => "Bundle/Parcel/Qty/Weight",
        DriverName => "Driver Name",
        DriverPhone => "Driver Phone",
        VehicleType => "Vehicle Type",
        Plate => "Plate No.",
        DriverLocation => "Current Driver Location",
        LastUpdate => "Last update",
        Map => "Map",
        MapUnavailable => "Map unavailable",
        LocationUnavailable => "Location unavailable",
        NotAvailable => "Not available",
        HistoryTitle => "Delivery History",
        NoMemo => "No memo",
        Photo => "Photo",
        NoImage => "No Image",
        ReferenceTitle => "Reference List",
        SchoolTitle => "School Record",
        ShareLink => "Link",
    }
}
