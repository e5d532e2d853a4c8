//! Slippy-map tile provider catalogue.
//!
//! Providers are selected by a configuration key (`"OSM"`, `"CARTO_DARK"`,
//! ...). Unknown keys fall back to [`TileProvider::CartoDark`] so a typo in
//! build configuration still yields a working map.

#[cfg(test)]
#[path = "tiles_test.rs"]
mod tiles_test;

/// Tile edge length in CSS pixels for every provider in the catalogue.
pub const TILE_SIZE: f64 = 256.0;

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// A tile-image source plus the attribution it requires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileProvider {
    Osm,
    #[default]
    CartoDark,
    CartoLight,
    StamenToner,
    Esri,
}

impl TileProvider {
    pub const ALL: [Self; 5] = [Self::Osm, Self::CartoDark, Self::CartoLight, Self::StamenToner, Self::Esri];

    /// Configuration key for this provider.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Osm => "OSM",
            Self::CartoDark => "CARTO_DARK",
            Self::CartoLight => "CARTO_LIGHT",
            Self::StamenToner => "STAMEN_TONER",
            Self::Esri => "ESRI",
        }
    }

    /// Strict lookup by key (case-insensitive, surrounding whitespace ignored).
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|p| p.key().eq_ignore_ascii_case(key))
    }

    /// Lookup by key, falling back to the default provider.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        Self::parse(key).unwrap_or_default()
    }

    #[must_use]
    pub fn url_template(self) -> &'static str {
        match self {
            Self::Osm => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::CartoDark => "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
            Self::CartoLight => "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            Self::StamenToner => "https://stamen-tiles.a.ssl.fastly.net/toner/{z}/{x}/{y}.png",
            Self::Esri => "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        }
    }

    /// Plain-text attribution to display alongside the tiles.
    #[must_use]
    pub fn attribution(self) -> &'static str {
        match self {
            Self::Osm => "© OpenStreetMap contributors",
            Self::CartoDark | Self::CartoLight => "© OSM contributors © CARTO",
            Self::StamenToner => "Map tiles by Stamen Design, © OSM",
            Self::Esri => "Tiles © Esri — Source: Esri, DeLorme, NAVTEQ, USGS, Intermap",
        }
    }

    /// Concrete image URL for one tile.
    ///
    /// The `{s}` subdomain is picked deterministically from the tile address so
    /// neighbouring tiles spread across hosts and the same tile always maps to
    /// the same URL (browser cache friendly). `{r}` expands to the empty
    /// string; retina tiles are not requested.
    #[must_use]
    pub fn tile_url(self, z: u8, x: u32, y: u32) -> String {
        let idx = (u64::from(x) + u64::from(y)) % SUBDOMAINS.len() as u64;
        let subdomain = SUBDOMAINS[usize::try_from(idx).unwrap_or_default()];
        self.url_template()
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{r}", "")
    }
}
