//! Spanish.

use crate::locale::{strings, LocaleDefinition};

pub fn definition() -> LocaleDefinition {
    LocaleDefinition {
        code: "es".to_string(),
        title: "Español".to_string(),
        first_names: strings(&[
            "Hugo", "Lucía", "Martín", "Sofía", "Mateo", "Martina", "Pablo", "María", "Daniel",
            "Paula", "Alejandro", "Valeria", "Íñigo", "Begoña", "José", "Ramón",
        ]),
        last_names: strings(&[
            "García", "Rodríguez", "González", "Fernández", "López", "Martínez", "Sánchez",
            "Pérez", "Gómez", "Martín", "Jiménez", "Ruiz", "Hernández", "Díaz", "Muñoz",
        ]),
        words: strings(&[
            "casa", "árbol", "agua", "luz", "ciudad", "tiempo", "mundo", "año", "día",
            "camino", "mano", "imagen", "pregunta", "trabajo", "vida", "hora", "escuela",
            "palabra", "fuerza", "flor",
        ]),
        cities: strings(&[
            "Madrid", "Barcelona", "Valencia", "Sevilla", "Zaragoza", "Málaga", "Murcia",
            "Palma", "Bilbao", "Alicante", "Córdoba", "Valladolid", "Vigo", "Gijón",
        ]),
        countries: strings(&[
            "España", "México", "Argentina", "Colombia", "Perú", "Chile", "Venezuela",
            "Ecuador", "Uruguay", "Portugal", "Francia", "Italia",
        ]),
        street_names: strings(&[
            "Mayor", "del Sol", "de la Constitución", "Real", "de Alcalá", "Nueva",
            "del Carmen", "San Juan", "de la Iglesia",
        ]),
        street_suffixes: strings(&["Calle", "Avenida", "Plaza", "Paseo", "Camino"]),
        address_format: "{suffix} {street}, {number}".to_string(),
        phone_formats: strings(&["9## ### ###", "6## ### ###", "+34 9## ## ## ##"]),
        postcode_formats: strings(&["#####"]),
        email_domains: strings(&["gmail.com", "hotmail.es", "yahoo.es"]),
        domain_suffixes: strings(&["es", "com", "net", "org", "info"]),
    }
}
