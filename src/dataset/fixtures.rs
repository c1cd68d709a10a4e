use super::*;

pub fn entry(shabda: &str, linga: &str, anta: &str, vibhakti: &str, forms: [&str; 3]) -> Entry {
    Entry {
        shabda: shabda.to_owned(),
        linga: linga.to_owned(),
        anta: anta.to_owned(),
        vibhakti: vibhakti.to_owned(),
        eka: forms[0].to_owned(),
        dvi: forms[1].to_owned(),
        bahu: forms[2].to_owned(),
    }
}

pub fn rama(vibhakti: &str, forms: [&str; 3]) -> Entry {
    entry("राम", "पुं", "अ", vibhakti, forms)
}

/// Two words with full paradigms plus a third with a single case.
pub fn sample_entries() -> Vec<Entry> {
    vec![
        rama("प्रथमा", ["रामः", "रामौ", "रामाः"]),
        rama("द्वितीया", ["रामम्", "रामौ", "रामान्"]),
        rama("तृतीया", ["रामेण", "रामाभ्याम्", "रामैः"]),
        rama("चतुर्थी", ["रामाय", "रामाभ्याम्", "रामेभ्यः"]),
        rama("पञ्चमी", ["रामात्", "रामाभ्याम्", "रामेभ्यः"]),
        rama("षष्ठी", ["रामस्य", "रामयोः", "रामाणाम्"]),
        rama("सप्तमी", ["रामे", "रामयोः", "रामेषु"]),
        rama("संबोधन", ["रामः / हे राम", "रामौ", "रामाः"]),
        entry("लता", "स्त्री", "आ", "प्रथमा", ["लता", "लते", "लताः"]),
        entry("लता", "स्त्री", "आ", "द्वितीया", ["लताम्", "लते", "लताः"]),
        entry("मति", "स्त्री", "इ", "प्रथमा", ["मतिः", "मती", "मतयः"]),
    ]
}

pub fn sample_index() -> DatasetIndex {
    DatasetIndex::new(sample_entries()).unwrap()
}

/// The two-row paradigm where nominative and vocative singular coincide.
pub fn syncretic_index() -> DatasetIndex {
    DatasetIndex::new(vec![
        rama("प्रथमा", ["रामः", "", ""]),
        rama("संबोधन", ["रामः", "", ""]),
    ])
    .unwrap()
}
