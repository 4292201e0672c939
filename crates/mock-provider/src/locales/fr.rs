//! French.

use crate::locale::{strings, LocaleDefinition};

pub fn definition() -> LocaleDefinition {
    LocaleDefinition {
        code: "fr".to_string(),
        title: "Français".to_string(),
        first_names: strings(&[
            "Gabriel", "Louise", "Léo", "Jade", "Raphaël", "Ambre", "Arthur", "Alice", "Louis",
            "Chloé", "Jules", "Léa", "Hugo", "Manon", "Étienne", "Hélène",
        ]),
        last_names: strings(&[
            "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand",
            "Leroy", "Moreau", "Simon", "Laurent", "Lefèvre", "Michel", "Garçon", "Fournier",
        ]),
        words: strings(&[
            "maison", "arbre", "eau", "lumière", "ville", "temps", "monde", "année", "jour",
            "chemin", "main", "image", "question", "travail", "vie", "heure", "école", "mot",
            "force", "fleur",
        ]),
        cities: strings(&[
            "Paris", "Marseille", "Lyon", "Toulouse", "Nice", "Nantes", "Strasbourg",
            "Montpellier", "Bordeaux", "Lille", "Rennes", "Reims", "Le Havre", "Grenoble",
        ]),
        countries: strings(&[
            "France", "Belgique", "Suisse", "Canada", "Allemagne", "Italie", "Espagne",
            "Portugal", "Maroc", "Sénégal", "Luxembourg", "Tunisie",
        ]),
        street_names: strings(&[
            "de la Paix", "Victor Hugo", "de la République", "Pasteur", "du Moulin",
            "des Lilas", "de l'Église", "Jean Jaurès", "du Château",
        ]),
        street_suffixes: strings(&["Rue", "Avenue", "Boulevard", "Place", "Allée"]),
        address_format: "{number} {suffix} {street}".to_string(),
        phone_formats: strings(&["01 ## ## ## ##", "06 ## ## ## ##", "+33 # ## ## ## ##"]),
        postcode_formats: strings(&["#####"]),
        email_domains: strings(&["gmail.com", "yahoo.fr", "hotmail.fr", "orange.fr"]),
        domain_suffixes: strings(&["fr", "com", "net", "org", "eu"]),
    }
}
