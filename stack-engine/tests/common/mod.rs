//! Shared catalog fixtures for integration tests

#![allow(dead_code)]

use stack_engine::{
    Category, CompoundRecord, InteractionEdge, InteractionType, LegalStatus, MechanismRecord,
    SideEffectRecord,
};

pub fn compound(
    id: &str,
    category: Category,
    legal_status: LegalStatus,
    evidence: Option<f64>,
    safety: Option<f64>,
    mechanism: &str,
) -> CompoundRecord {
    CompoundRecord {
        id: id.to_string(),
        slug: id.to_string(),
        name: title_case(id),
        category,
        legal_status,
        evidence_score: evidence,
        safety_score: safety,
        mechanism: Some(mechanism.to_string()),
        typical_dose: Some(5.0),
        min_dose: Some(1.0),
        max_dose: Some(10.0),
        dose_unit: Some("mg".to_string()),
        frequency: Some("daily".to_string()),
        mechanisms: vec![MechanismRecord {
            name: None,
            description: mechanism.to_string(),
        }],
        interactions: vec![],
        side_effects: vec![],
        studies: vec![],
    }
}

pub fn edge(source: &str, target: &str, kind: InteractionType, description: &str) -> InteractionEdge {
    InteractionEdge {
        source_id: source.to_string(),
        target_id: target.to_string(),
        interaction_type: kind,
        severity: None,
        description: Some(description.to_string()),
    }
}

fn title_case(id: &str) -> String {
    id.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// A mixed catalog spanning every tier, with a few stored interactions.
pub fn catalog() -> Vec<CompoundRecord> {
    use Category::*;
    use LegalStatus::*;

    let mut compounds = vec![
        compound("creatine", Supplement, Legal, Some(92.0), Some(90.0), "Replenishes phosphocreatine for ATP and power output"),
        compound("leucine", AminoAcid, Legal, Some(70.0), Some(88.0), "Activates mTOR to drive protein synthesis"),
        compound("magnesium", VitaminMineral, Legal, Some(75.0), Some(92.0), "Magnesium supports GABA signalling and sleep"),
        compound("zinc", VitaminMineral, Legal, Some(68.0), Some(85.0), "Zinc cofactor for testosterone production"),
        compound("vitamin-d", VitaminMineral, Legal, Some(80.0), Some(90.0), "Vitamin D receptor signalling and testosterone"),
        compound("melatonin", Supplement, Legal, Some(82.0), Some(85.0), "Circadian signal that shortens sleep onset latency"),
        compound("glycine", AminoAcid, Legal, Some(60.0), Some(95.0), "Lowers core body temperature to improve sleep quality"),
        compound("l-theanine", AminoAcid, Legal, Some(64.0), Some(93.0), "Promotes alpha waves and GABA calm without sedation"),
        compound("ashwagandha", Adaptogen, Legal, Some(72.0), Some(78.0), "Lowers cortisol and the stress response"),
        compound("rhodiola", Adaptogen, Legal, Some(58.0), Some(80.0), "Fatigue resistance under stress"),
        compound("caffeine", Nootropic, Legal, Some(88.0), Some(70.0), "Adenosine antagonist improving alertness and focus"),
        compound("omega-3", Supplement, Legal, Some(85.0), Some(92.0), "EPA/DHA reduce inflammation and cytokine signalling"),
        compound("citrulline", AminoAcid, Legal, Some(66.0), Some(90.0), "Nitric oxide precursor improving blood flow and endurance"),
        compound("green-tea-extract", FatLoss, Legal, Some(55.0), Some(70.0), "Catechins raise fat oxidation and thermogenesis"),
        compound("mk-677", GhSecretagogue, GrayMarket, Some(62.0), Some(55.0), "Ghrelin mimetic raising growth hormone and IGF-1"),
        compound("bpc-157", Peptide, GrayMarket, Some(48.0), Some(70.0), "Angiogenesis and tendon healing repair"),
        compound("ostarine", Sarm, GrayMarket, Some(60.0), Some(50.0), "Selective androgen receptor modulator for muscle"),
        compound("testosterone", Hormonal, Prescription, Some(95.0), Some(60.0), "Androgen receptor agonist driving protein synthesis"),
        compound("nandrolone", Anabolic, Prescription, Some(80.0), Some(45.0), "Androgen receptor agonist with strong nitrogen retention"),
        compound("oxandrolone", Anabolic, Prescription, Some(70.0), Some(55.0), "Androgen receptor anabolic agent for muscle"),
        compound("anastrozole", Hormonal, Prescription, Some(78.0), Some(60.0), "Aromatase inhibitor lowering estrogen"),
        compound("modafinil", Nootropic, Scheduled, Some(76.0), Some(72.0), "Wakefulness promoter via dopamine transporter"),
        compound("trenbolone", Anabolic, GrayMarket, Some(40.0), Some(20.0), "Androgen receptor agonist with nitrogen retention"),
    ];

    if let Some(trenbolone) = compounds.last_mut() {
        trenbolone.side_effects = vec![SideEffectRecord {
            name: "Cardiovascular strain".to_string(),
            severity: "SEVERE".to_string(),
        }];
    }

    let push = |compounds: &mut Vec<CompoundRecord>, owner: &str, e: InteractionEdge| {
        if let Some(c) = compounds.iter_mut().find(|c| c.id == owner) {
            c.interactions.push(e);
        }
    };
    push(&mut compounds, "nandrolone", edge("nandrolone", "oxandrolone", InteractionType::Contraindicated, "Stacked hepatic and lipid strain."));
    push(&mut compounds, "caffeine", edge("caffeine", "l-theanine", InteractionType::Synergistic, "Smoother focus with fewer jitters."));
    push(&mut compounds, "melatonin", edge("melatonin", "magnesium", InteractionType::Synergistic, "Complementary sleep mechanisms."));
    push(&mut compounds, "modafinil", edge("modafinil", "caffeine", InteractionType::Caution, "Additive stimulant load."));
    push(&mut compounds, "mk-677", edge("mk-677", "testosterone", InteractionType::Caution, "Monitor fasting glucose."));
    push(&mut compounds, "ostarine", edge("ostarine", "nandrolone", InteractionType::Contraindicated, "Overlapping androgen suppression."));

    compounds
}

pub fn by_id<'a>(catalog: &'a [CompoundRecord], id: &str) -> &'a CompoundRecord {
    catalog
        .iter()
        .find(|c| c.id == id)
        .unwrap_or_else(|| panic!("fixture has no compound {id}"))
}
