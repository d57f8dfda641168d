//! Bundled provider definitions.
//!
//! This module is reference data, not logic: the providers, variants, URL
//! templates, zoom bounds and attribution HTML shipped with the crate.
//! Adding or removing a provider is a content change; the resolver never
//! special-cases any entry here.
//!
//! Attribution strings are composed from small credit helpers and may embed
//! `{attribution.<Provider>}` placeholders, expanded at resolution time.

use super::keys;
use super::table::ProviderTable;
use super::types::{LayerOptions, Provider, Variant};

const ICON_DATA: &str = " 📦 ";
const ICON_MAP: &str = " 🗺️ ";
const ICON_HOSTING: &str = " 🏠 ";
const ICON_RENDERING: &str = " 🚀 ";
const ICON_COPYRIGHT: &str = " ©️ ";
const ICON_LICENSE: &str = " 🏷️ ";
const ICON_FIX: &str = " 🔧 ";
const ICON_JOIN: &str = " 🖐️ ";
const ICON_DONATE: &str = " ❤️ ";

/// Anchor attribute fragment: `href="..." title="..." target="_blank"`.
fn anchor(href: &str, title: &str) -> String {
    format!("href=\"{}\" title=\"{}\" target=\"_blank\"", href, title)
}

/// Data source credit: who the underlying data comes from.
fn data_credit(link: &str, attribution: &str) -> String {
    format!(
        " <nobr><a {}>{}</a><b>données </b> {}</nobr> ",
        link, ICON_DATA, attribution
    )
}

/// Base map credit: who draws the tiles.
fn tiles_credit(link: &str, name: &str) -> String {
    format!(
        " <nobr><a {}>{}</a><b>fond de carte</b> <a {}><b>{}</b></a></nobr> ",
        link, ICON_MAP, link, name
    )
}

/// Hosting credit: who serves the tiles.
fn hosting_credit(link: &str, name: &str) -> String {
    format!(
        " <nobr><a {}>{}</a>hébergé <a {}><b>{}</b></a></nobr> ",
        link, ICON_HOSTING, link, name
    )
}

/// License credit: the terms the data or tiles are published under.
fn license_credit(link: &str, lead: &str, kind: &str, name: &str) -> String {
    format!(
        " <nobr><a {}>{}</a>{}<a {}>{}{}</a></nobr> ",
        link, ICON_LICENSE, lead, link, kind, name
    )
}

fn odbl_license() -> String {
    let link = anchor(
        "https://opendatacommons.org/licenses/odbl/1.0/",
        "Open Database License (ODbL) v1.0",
    );
    license_credit(&link, " sous ", " licence libre ", "ODbL")
}

fn cc_by_sa2_license() -> String {
    let link = anchor(
        "https://creativecommons.org/licenses/by-sa/2.0/deed.fr",
        "Licence Creative Commons - Attribution - Partage dans les Mêmes Conditions 2.0",
    );
    license_credit(&link, " sous ", " licence libre ", "CC BY-SA")
}

fn cc_by3_license() -> String {
    let link = anchor(
        "https://creativecommons.org/licenses/by/3.0/deed.fr",
        "Licence Creative Commons - Attribution 3.0",
    );
    license_credit(&link, " sous ", " licence libre ", "CC BY")
}

fn cc0_license() -> String {
    let link = anchor(
        "https://creativecommons.org/publicdomain/zero/1.0/deed.fr",
        "Licence CC0 1.0 universel - Transfert dans le Domaine Public",
    );
    license_credit(&link, " sous ", " licence domaine public ", "CC0")
}

fn osmfr_link() -> String {
    anchor(
        "https://www.openstreetmap.fr/mentions-legales/",
        "OpenStreetMap France - mentions légales",
    )
}

/// Trailing credit for the rendering library itself.
fn leaflet_rendering_credit() -> String {
    let link = anchor(
        "https://leafletjs.com",
        "Leaflet, bibliothèque JavaScript libre de cartographie en ligne",
    );
    format!(
        "<br> <nobr><a {}>{}</a><b>affichage</b> de cartes par <a {}><b>Leaflet</b></a></nobr> ",
        link, ICON_RENDERING, link
    )
}

/// The OpenStreetMap base attribution: data credit, license, donation and
/// contribution links. Every other bundled provider splices this in through
/// the `{attribution.OpenStreetMap}` placeholder.
fn openstreetmap_attribution() -> String {
    let osm_link = anchor(
        "https://www.openstreetmap.org",
        "données par &copy les contributeurs & contributrices OpenStreetMap",
    );
    let copy_link = anchor(
        "https://www.openstreetmap.org/copyright",
        "Droits d’auteur et licence OpenStreetMap",
    );
    let fix_link = anchor(
        "https://www.openstreetmap.org/fixthemap",
        "Améliorer la cartographie OpenStreetMap",
    );
    let join_link = anchor(
        "https://join.osmfoundation.org/",
        "Adhérer à la fondation OpenStreetMap",
    );
    let donate_link = anchor("https://donate.openstreetmap.org/", "Faire un don");

    let contributors = format!(
        " <nobr><a {}>{}<b>les contributeurs OpenStreetMap</b></a></nobr> ",
        copy_link, ICON_COPYRIGHT
    );
    let donate = format!("<a {}>{}</a>", donate_link, ICON_DONATE);
    let join = format!("<a {}>{}</a>", join_link, ICON_JOIN);
    let fixthemap = format!(" <nobr><a {}><b>{}améliorer</a></nobr> ", fix_link, ICON_FIX);

    format!(
        "{}{}{}{}{}<br>",
        data_credit(&osm_link, &contributors),
        odbl_license(),
        donate,
        join,
        fixthemap
    )
}

fn openstreetmap() -> Provider {
    let france_attribution = format!(
        "{{attribution.OpenStreetMap}}{}{}",
        tiles_credit(&osmfr_link(), "OpenStreetMap France") + &cc_by_sa2_license(),
        leaflet_rendering_credit()
    );
    let humanitaire_attribution = format!(
        "{{attribution.OpenStreetMap}}{}{}{}",
        tiles_credit(
            &anchor(
                "https://www.hotosm.org/updates/2013-09-29_a_new_window_on_openstreetmap_data",
                "Couche humanitaire par Yohan Boniface et HOT",
            ),
            "<nobr>Y. Boniface</nobr> & <nobr>Humanitarian OpenStreetMap Team</nobr>",
        ) + &cc0_license(),
        hosting_credit(&osmfr_link(), "OSM France"),
        leaflet_rendering_credit()
    );
    let breton_attribution = format!(
        "{{attribution.OpenStreetMap}}{}{}{}",
        tiles_credit(
            &anchor("http://www.openstreetmap.bzh/", "OpenStreetMap en breton"),
            "OpenStreetMap e brezhoneg",
        ) + &cc_by_sa2_license(),
        hosting_credit(&osmfr_link(), "OSM France"),
        leaflet_rendering_credit()
    );

    Provider::new("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
        .with_option(keys::MAX_ZOOM, 19)
        .with_option(keys::ATTRIBUTION, openstreetmap_attribution())
        .with_variant(
            "France",
            Variant::with_url(
                "https://{s}.tile.openstreetmap.fr/osmfr/{z}/{x}/{y}.png",
                LayerOptions::new()
                    .with(keys::MAX_ZOOM, 20)
                    .with(keys::ATTRIBUTION, france_attribution),
            ),
        )
        .with_variant(
            "humanitaire",
            Variant::with_url(
                "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png",
                LayerOptions::new().with(keys::ATTRIBUTION, humanitaire_attribution),
            ),
        )
        .with_variant(
            "breton",
            Variant::with_url(
                "https://tile.openstreetmap.bzh/br/{z}/{x}/{y}.png",
                LayerOptions::new().with(keys::ATTRIBUTION, breton_attribution),
            ),
        )
}

fn hydda() -> Provider {
    let attribution = format!(
        "{{attribution.OpenStreetMap}}{}{}",
        tiles_credit(
            &anchor("https://openstreetmap.se/om", "OpenStreetMap Sverige (Suède)"),
            "OpenStreetMap Sverige (Suède)",
        ) + &cc_by_sa2_license(),
        leaflet_rendering_credit()
    );

    Provider::new("https://{s}.tile.openstreetmap.se/hydda/{variant}/{z}/{x}/{y}.png")
        .with_option(keys::MAX_ZOOM, 18)
        .with_option(keys::ATTRIBUTION, attribution)
        .with_variant("Full", "full")
}

fn stamen() -> Provider {
    let attribution = format!(
        "{{attribution.OpenStreetMap}}{}{}",
        tiles_credit(&anchor("https://maps.stamen.com/", "Stamen Design"), "Stamen Design")
            + &cc_by3_license(),
        leaflet_rendering_credit()
    );

    Provider::new("https://stamen-tiles-{s}.a.ssl.fastly.net/{variant}/{z}/{x}/{y}.{ext}")
        .with_option(keys::ATTRIBUTION, attribution)
        .with_option(keys::SUBDOMAINS, "abcd")
        .with_option(keys::MIN_ZOOM, 0)
        .with_option(keys::MAX_ZOOM, 20)
        .with_option(keys::VARIANT, "toner")
        .with_option(keys::EXT, "png")
        .with_variant(
            "Watercolor",
            Variant::with_options(
                LayerOptions::new()
                    .with(keys::VARIANT, "watercolor")
                    .with(keys::MIN_ZOOM, 1)
                    .with(keys::MAX_ZOOM, 16),
            ),
        )
}

fn carto() -> Provider {
    let carto_link = anchor("https://carto.com/legal/", "Carto");
    let attribution = format!(
        "{{attribution.OpenStreetMap}}{}{}",
        tiles_credit(&carto_link, "Carto")
            + &license_credit(&carto_link, "", " usage non-commercial ", ""),
        leaflet_rendering_credit()
    );

    Provider::new("https://cartodb-basemaps-{s}.global.ssl.fastly.net/{variant}/{z}/{x}/{y}.png")
        .with_option(keys::ATTRIBUTION, attribution)
        .with_option(keys::SUBDOMAINS, "abcd")
        .with_option(keys::MAX_ZOOM, 19)
        .with_option(keys::VARIANT, "light_all")
        .with_variant("Positron", "light_all")
        .with_variant("DarkMatter", "dark_all")
}

/// Builds the bundled provider table.
pub(super) fn bundled_table() -> ProviderTable {
    ProviderTable::new()
        .with("OpenStreetMap", openstreetmap())
        .with("Hydda", hydda())
        .with("Stamen", stamen())
        .with("Carto", carto())
}
