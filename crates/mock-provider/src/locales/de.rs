//! German.

use crate::locale::{strings, LocaleDefinition};

pub fn definition() -> LocaleDefinition {
    LocaleDefinition {
        code: "de".to_string(),
        title: "Deutsch".to_string(),
        first_names: strings(&[
            "Lukas", "Anna", "Leon", "Lena", "Finn", "Marie", "Jonas", "Sophie", "Paul",
            "Emma", "Felix", "Mia", "Maximilian", "Hannah", "Jürgen", "Jörg", "Ursula", "Günter",
        ]),
        last_names: strings(&[
            "Müller", "Schmidt", "Schneider", "Fischer", "Weber", "Meyer", "Wagner", "Becker",
            "Schulz", "Hoffmann", "Schäfer", "Koch", "Bauer", "Richter", "Klein", "Wolf",
        ]),
        words: strings(&[
            "haus", "baum", "wasser", "licht", "stadt", "zeit", "welt", "jahr", "tag",
            "weg", "hand", "bild", "frage", "arbeit", "leben", "stunde", "schule", "wort",
            "kraft", "blume",
        ]),
        cities: strings(&[
            "Berlin", "Hamburg", "München", "Köln", "Frankfurt am Main", "Stuttgart",
            "Düsseldorf", "Leipzig", "Dortmund", "Essen", "Bremen", "Dresden", "Hannover",
            "Nürnberg",
        ]),
        countries: strings(&[
            "Deutschland", "Österreich", "Schweiz", "Frankreich", "Italien", "Spanien",
            "Niederlande", "Belgien", "Polen", "Dänemark", "Schweden", "Tschechien",
        ]),
        street_names: strings(&[
            "Haupt", "Schul", "Garten", "Bahnhof", "Dorf", "Berg", "Kirch", "Wald", "Ring",
            "Linden", "Birken",
        ]),
        street_suffixes: strings(&["straße", "weg", "gasse", "allee", "platz"]),
        address_format: "{street}{suffix} {number}".to_string(),
        phone_formats: strings(&["0### #######", "+49 ### ######", "0#### ######"]),
        postcode_formats: strings(&["#####"]),
        email_domains: strings(&["gmail.com", "web.de", "gmx.de", "t-online.de"]),
        domain_suffixes: strings(&["de", "com", "net", "org", "info"]),
    }
}
