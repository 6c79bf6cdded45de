//! Static road catalogs for the built-in cities.
//!
//! Each road is a straight two-point segment with a base flow on the 0–100
//! scale (typical congestion under normal conditions).  The catalogs are
//! versioned reference data; custom catalogs can be loaded at runtime with
//! [`load_roads_csv`][crate::load_roads_csv].

use std::borrow::Cow;

use tf_core::GeoPoint;

/// A named road with fixed endpoints and a nominal base flow.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadDefinition {
    pub name:      Cow<'static, str>,
    pub start:     GeoPoint,
    pub end:       GeoPoint,
    /// 0–100.
    pub base_flow: f64,
}

const fn road(name: &'static str, start: (f64, f64), end: (f64, f64), base_flow: f64) -> RoadDefinition {
    RoadDefinition {
        name: Cow::Borrowed(name),
        start: GeoPoint::new(start.0, start.1),
        end: GeoPoint::new(end.0, end.1),
        base_flow,
    }
}

/// Return the catalog for `city_key`, or `None` for an unknown key.
pub fn roads_for(city_key: &str) -> Option<&'static [RoadDefinition]> {
    match city_key {
        "ankara"   => Some(ANKARA_ROADS),
        "istanbul" => Some(ISTANBUL_ROADS),
        "izmir"    => Some(IZMIR_ROADS),
        _          => None,
    }
}

/// Like [`roads_for`] but falls back to the default city's (Ankara) catalog.
pub fn roads_or_default(city_key: &str) -> &'static [RoadDefinition] {
    roads_for(city_key).unwrap_or(ANKARA_ROADS)
}

pub static ANKARA_ROADS: &[RoadDefinition] = &[
    road("Atatürk Bulvarı", (39.9208, 32.8541), (39.9334, 32.8597), 75.0),
    road("Eskişehir Yolu", (39.9334, 32.8597), (39.9500, 32.7800), 70.0),
    road("Konya Yolu", (39.8800, 32.8597), (39.8500, 32.8800), 65.0),
    road("İstanbul Yolu (D-750)", (39.9334, 32.8597), (40.0000, 32.9000), 80.0),
    road("Tunus Caddesi", (39.9100, 32.8500), (39.9200, 32.8650), 60.0),
    road("Çankaya Caddesi", (39.9100, 32.8600), (39.9000, 32.8700), 55.0),
    road("Dikimevi Kavşağı", (39.9334, 32.8597), (39.9400, 32.8700), 72.0),
    road("Kızılay - Sıhhiye Hattı", (39.9200, 32.8540), (39.9334, 32.8650), 78.0),
    road("Tunalı Hilmi Caddesi", (39.9150, 32.8480), (39.9250, 32.8550), 68.0),
    road("Gazi Mustafa Kemal Bulvarı", (39.9500, 32.8500), (39.9700, 32.8600), 73.0),
    road("Cemal Gürsel Caddesi", (39.9000, 32.8500), (39.9100, 32.8600), 58.0),
    road("İnönü Bulvarı", (39.9250, 32.8500), (39.9350, 32.8650), 70.0),
    road("Mevlana Bulvarı", (39.8900, 32.8500), (39.8800, 32.8700), 63.0),
    road("Anadolu Bulvarı", (39.9300, 32.8700), (39.9400, 32.8900), 67.0),
    road("Bilkent Yolu", (39.9334, 32.8597), (39.8800, 32.7500), 75.0),
    road("Ümitköy - Çayyolu Aksı", (39.9500, 32.7000), (39.9700, 32.7300), 69.0),
    road("Ankara Çevre Yolu (Kuzey)", (40.0000, 32.8000), (40.0200, 32.9000), 82.0),
    road("Demetevler Yolu", (39.9450, 32.8200), (39.9550, 32.8400), 61.0),
    road("Şehit Teğmen Kalmaz Cad.", (39.9100, 32.8700), (39.9200, 32.8850), 56.0),
    road("Konya Yolu Kavşağı", (39.8700, 32.8600), (39.8600, 32.8800), 71.0),
];

pub static ISTANBUL_ROADS: &[RoadDefinition] = &[
    road("E-5 (Avrupa Yakası)", (41.0082, 28.8784), (41.0082, 29.0784), 85.0),
    road("E-5 (Anadolu Yakası)", (40.9800, 29.0800), (40.9700, 29.2500), 87.0),
    road("Bağdat Caddesi", (40.9700, 29.0800), (40.9850, 29.1200), 75.0),
    road("TEM Otoyolu (Kuzey)", (41.0500, 28.8500), (41.0800, 29.1000), 90.0),
    road("Boğaziçi Köprüsü", (41.0392, 29.0050), (41.0450, 29.0100), 80.0),
    road("FSM Köprüsü", (41.1050, 29.0350), (41.1100, 29.0400), 82.0),
    road("Büyükdere Caddesi", (41.0500, 28.9800), (41.1000, 29.0000), 70.0),
    road("Barbaros Bulvarı", (41.0700, 29.0100), (41.0850, 29.0250), 68.0),
    road("Şişli - Mecidiyeköy Hattı", (41.0550, 28.9850), (41.0650, 28.9950), 78.0),
    road("Halkalı - Küçükçekmece", (41.0100, 28.6500), (41.0200, 28.7800), 73.0),
    road("Kadıköy - Bostancı Sahil", (40.9900, 29.0300), (40.9650, 29.0900), 72.0),
    road("Fatih Sultan Mehmet Bulvarı", (41.0300, 28.9500), (41.0500, 28.9700), 76.0),
    road("Vatan Caddesi", (41.0150, 28.9400), (41.0250, 28.9600), 69.0),
    road("Kennedy Caddesi (Sahil)", (41.0050, 28.9700), (40.9950, 29.0000), 65.0),
    road("Basın Ekspres Yolu", (41.0000, 28.7800), (41.0200, 28.8500), 88.0),
    road("D-100 Maltepe", (40.9400, 29.1200), (40.9300, 29.1600), 81.0),
    road("Maslak - Ayazağa Yolu", (41.1000, 29.0200), (41.1150, 29.0350), 74.0),
    road("Üsküdar - Çengelköy", (41.0250, 29.0150), (41.0400, 29.0550), 67.0),
    road("Kağıthane Caddesi", (41.0800, 28.9700), (41.0950, 28.9850), 63.0),
    road("Yavuz Sultan Selim Köprüsü", (41.1800, 29.1000), (41.1850, 29.1100), 79.0),
];

pub static IZMIR_ROADS: &[RoadDefinition] = &[
    road("Şehit Fethi Bey Caddesi", (38.4237, 27.1328), (38.4337, 27.1528), 70.0),
    road("Mustafa Kemal Sahil Bulvarı", (38.4100, 27.1200), (38.4400, 27.1600), 65.0),
    road("Ankara Caddesi", (38.4200, 27.1400), (38.4350, 27.1450), 75.0),
    road("İzmir-Aydın Otoyolu", (38.3800, 27.1500), (38.3500, 27.2000), 80.0),
    road("Halkapınar Kavşağı", (38.4350, 27.1350), (38.4450, 27.1450), 78.0),
    road("Bornova Caddesi", (38.4500, 27.2000), (38.4650, 27.2200), 72.0),
    road("Gaziemir Yolu", (38.3800, 27.1300), (38.3600, 27.1500), 68.0),
    road("Çeşme Otoyolu", (38.4237, 27.1428), (38.3500, 26.9000), 82.0),
    road("Karşıyaka İskelesi - Bostanlı", (38.4600, 27.1100), (38.4750, 27.1300), 66.0),
    road("Alsancak Caddesi", (38.4300, 27.1400), (38.4400, 27.1500), 73.0),
    road("Kemalpaşa Caddesi", (38.4200, 27.1500), (38.4800, 27.2500), 71.0),
    road("Gazi Bulvarı", (38.4100, 27.1350), (38.4250, 27.1450), 69.0),
    road("Konak Meydanı Çevresi", (38.4180, 27.1280), (38.4240, 27.1380), 76.0),
    road("İzmir Çevre Yolu", (38.4500, 27.2000), (38.5000, 27.2500), 85.0),
    road("Manisa Yolu", (38.4400, 27.1800), (38.5000, 27.2300), 74.0),
    road("Ege Üniversitesi Yolu", (38.4600, 27.2200), (38.4750, 27.2350), 62.0),
    road("Çiğli - Menemen Yolu", (38.5000, 27.0500), (38.5500, 27.0200), 67.0),
    road("Balçova Teleferik Yolu", (38.3900, 27.0300), (38.3800, 27.0450), 58.0),
    road("Narlıdere Sahil", (38.3950, 27.0600), (38.3850, 27.0800), 61.0),
    road("Buca - Kaynaklar Yolu", (38.3800, 27.1800), (38.3650, 27.2000), 64.0),
];
