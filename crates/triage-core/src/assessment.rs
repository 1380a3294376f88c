//! Medical assessment data model.
//!
//! An assessment is a fixed set of named clinical findings, each of which is
//! nullable: `None` means the finding has not been assessed yet, which is
//! distinct from an explicit negative answer. Field names and enum tokens
//! serialize as the camelCase literals the mobile clients exchange
//! (`"largeJoint"`, `"fingerToe"`, `"uncontrolled"`, ...). The boolean-like
//! members of the tri-state domains serialize as the string tokens
//! `"true"` / `"false"`.

use serde::{Deserialize, Serialize};

/// Breathing finding. `Absent` means the patient is not breathing at all.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Breathing {
    #[serde(rename = "false")]
    Absent,
    Acute,
    #[serde(rename = "true")]
    Normal,
}

/// Seizure finding. `Post` covers a seizure that has ended (post-ictal).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Seizure {
    Current,
    Post,
    #[serde(rename = "false")]
    Absent,
}

/// Burn finding, by site or mechanism.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Burn {
    Face,
    Electrical,
    Circumferential,
    Chemical,
    Other,
    #[serde(rename = "false")]
    Absent,
}

/// Dislocation finding, by joint size.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Dislocation {
    LargeJoint,
    FingerToe,
    #[serde(rename = "false")]
    Absent,
}

/// Fracture finding.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Fracture {
    Compound,
    Closed,
    #[serde(rename = "false")]
    Absent,
}

/// External bleeding finding.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Haemorrhage {
    Uncontrolled,
    Controlled,
    #[serde(rename = "false")]
    Absent,
}

/// Reported pain level. The scale has no explicit negative member;
/// "no pain worth recording" is simply left unassessed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PainScale {
    Severe,
    Moderate,
}

/// Names one assessment field. Used to address single-field patches and to
/// report which findings are still unanswered.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FindingId {
    Breathing,
    Seizure,
    Burn,
    CardiacArrest,
    Fever,
    Dislocation,
    Fracture,
    Haemorrhage,
    VomitingBlood,
    VomitingPersistent,
    CoughingBlood,
    SomeUnconsciousness,
    ChestPain,
    StabbedNeck,
    FacialDropping,
    Aggression,
    EyeInjury,
    PoisoningOverdose,
    LimbCyanosis,
    Pregnant,
    ScalePain,
}

impl FindingId {
    /// Every finding, in the order the assessment form lists them.
    pub const ALL: [FindingId; 21] = [
        FindingId::Breathing,
        FindingId::Seizure,
        FindingId::Burn,
        FindingId::CardiacArrest,
        FindingId::Fever,
        FindingId::Dislocation,
        FindingId::Fracture,
        FindingId::Haemorrhage,
        FindingId::VomitingBlood,
        FindingId::VomitingPersistent,
        FindingId::CoughingBlood,
        FindingId::SomeUnconsciousness,
        FindingId::ChestPain,
        FindingId::StabbedNeck,
        FindingId::FacialDropping,
        FindingId::Aggression,
        FindingId::EyeInjury,
        FindingId::PoisoningOverdose,
        FindingId::LimbCyanosis,
        FindingId::Pregnant,
        FindingId::ScalePain,
    ];

    /// The camelCase field name as it appears on the wire.
    pub fn field_name(self) -> &'static str {
        match self {
            FindingId::Breathing => "breathing",
            FindingId::Seizure => "seizure",
            FindingId::Burn => "burn",
            FindingId::CardiacArrest => "cardiacArrest",
            FindingId::Fever => "fever",
            FindingId::Dislocation => "dislocation",
            FindingId::Fracture => "fracture",
            FindingId::Haemorrhage => "haemorrhage",
            FindingId::VomitingBlood => "vomitingBlood",
            FindingId::VomitingPersistent => "vomitingPersistent",
            FindingId::CoughingBlood => "coughingBlood",
            FindingId::SomeUnconsciousness => "someUnconsciousness",
            FindingId::ChestPain => "chestPain",
            FindingId::StabbedNeck => "stabbedNeck",
            FindingId::FacialDropping => "facialDropping",
            FindingId::Aggression => "aggression",
            FindingId::EyeInjury => "eyeInjury",
            FindingId::PoisoningOverdose => "poisoningOverdose",
            FindingId::LimbCyanosis => "limbCyanosis",
            FindingId::Pregnant => "pregnant",
            FindingId::ScalePain => "scalePain",
        }
    }

    /// Reverse of [`FindingId::field_name`].
    pub fn from_field_name(name: &str) -> Option<FindingId> {
        FindingId::ALL
            .iter()
            .copied()
            .find(|f| f.field_name() == name)
    }
}

impl Breathing {
    /// Parse the wire token. Unrecognized tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "false" => Some(Breathing::Absent),
            "acute" => Some(Breathing::Acute),
            "true" => Some(Breathing::Normal),
            _ => None,
        }
    }
}

impl Seizure {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "current" => Some(Seizure::Current),
            "post" => Some(Seizure::Post),
            "false" => Some(Seizure::Absent),
            _ => None,
        }
    }
}

impl Burn {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "face" => Some(Burn::Face),
            "electrical" => Some(Burn::Electrical),
            "circumferential" => Some(Burn::Circumferential),
            "chemical" => Some(Burn::Chemical),
            "other" => Some(Burn::Other),
            "false" => Some(Burn::Absent),
            _ => None,
        }
    }
}

impl Dislocation {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "largeJoint" => Some(Dislocation::LargeJoint),
            "fingerToe" => Some(Dislocation::FingerToe),
            "false" => Some(Dislocation::Absent),
            _ => None,
        }
    }
}

impl Fracture {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "compound" => Some(Fracture::Compound),
            "closed" => Some(Fracture::Closed),
            "false" => Some(Fracture::Absent),
            _ => None,
        }
    }
}

impl Haemorrhage {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "uncontrolled" => Some(Haemorrhage::Uncontrolled),
            "controlled" => Some(Haemorrhage::Controlled),
            "false" => Some(Haemorrhage::Absent),
            _ => None,
        }
    }
}

impl PainScale {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "severe" => Some(PainScale::Severe),
            "moderate" => Some(PainScale::Moderate),
            _ => None,
        }
    }
}

/// Boolean findings use the same case-sensitive tokens as the tri-state
/// domains.
fn bool_from_token(token: &str) -> Option<bool> {
    match token {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// One patient's clinical findings, collected incrementally during an
/// emergency. Every field starts `None`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalAssessment {
    pub breathing: Option<Breathing>,
    pub seizure: Option<Seizure>,
    pub burn: Option<Burn>,
    pub cardiac_arrest: Option<bool>,
    pub fever: Option<bool>,
    pub dislocation: Option<Dislocation>,
    pub fracture: Option<Fracture>,
    pub haemorrhage: Option<Haemorrhage>,
    pub vomiting_blood: Option<bool>,
    pub vomiting_persistent: Option<bool>,
    pub coughing_blood: Option<bool>,
    pub some_unconsciousness: Option<bool>,
    pub chest_pain: Option<bool>,
    pub stabbed_neck: Option<bool>,
    pub facial_dropping: Option<bool>,
    pub aggression: Option<bool>,
    pub eye_injury: Option<bool>,
    pub poisoning_overdose: Option<bool>,
    pub limb_cyanosis: Option<bool>,
    pub pregnant: Option<bool>,
    pub scale_pain: Option<PainScale>,
}

fn merge_field<T: Copy>(current: &mut Option<T>, incoming: Option<T>) {
    if incoming.is_some() {
        *current = incoming;
    }
}

impl MedicalAssessment {
    /// True when a value has been recorded for the given finding.
    pub fn is_assessed(&self, finding: FindingId) -> bool {
        match finding {
            FindingId::Breathing => self.breathing.is_some(),
            FindingId::Seizure => self.seizure.is_some(),
            FindingId::Burn => self.burn.is_some(),
            FindingId::CardiacArrest => self.cardiac_arrest.is_some(),
            FindingId::Fever => self.fever.is_some(),
            FindingId::Dislocation => self.dislocation.is_some(),
            FindingId::Fracture => self.fracture.is_some(),
            FindingId::Haemorrhage => self.haemorrhage.is_some(),
            FindingId::VomitingBlood => self.vomiting_blood.is_some(),
            FindingId::VomitingPersistent => self.vomiting_persistent.is_some(),
            FindingId::CoughingBlood => self.coughing_blood.is_some(),
            FindingId::SomeUnconsciousness => self.some_unconsciousness.is_some(),
            FindingId::ChestPain => self.chest_pain.is_some(),
            FindingId::StabbedNeck => self.stabbed_neck.is_some(),
            FindingId::FacialDropping => self.facial_dropping.is_some(),
            FindingId::Aggression => self.aggression.is_some(),
            FindingId::EyeInjury => self.eye_injury.is_some(),
            FindingId::PoisoningOverdose => self.poisoning_overdose.is_some(),
            FindingId::LimbCyanosis => self.limb_cyanosis.is_some(),
            FindingId::Pregnant => self.pregnant.is_some(),
            FindingId::ScalePain => self.scale_pain.is_some(),
        }
    }

    /// Findings not yet assessed, in assessment-form order.
    pub fn pending(&self) -> Vec<FindingId> {
        FindingId::ALL
            .iter()
            .copied()
            .filter(|f| !self.is_assessed(*f))
            .collect()
    }

    /// True when no finding has been assessed yet.
    pub fn is_empty(&self) -> bool {
        FindingId::ALL.iter().all(|f| !self.is_assessed(*f))
    }

    /// Overwrite each field the patch carries a value for. Fields the patch
    /// leaves `None` keep their current value: a patch can refine an
    /// assessment but never un-answer a finding.
    pub fn merge(&mut self, patch: &MedicalAssessment) {
        merge_field(&mut self.breathing, patch.breathing);
        merge_field(&mut self.seizure, patch.seizure);
        merge_field(&mut self.burn, patch.burn);
        merge_field(&mut self.cardiac_arrest, patch.cardiac_arrest);
        merge_field(&mut self.fever, patch.fever);
        merge_field(&mut self.dislocation, patch.dislocation);
        merge_field(&mut self.fracture, patch.fracture);
        merge_field(&mut self.haemorrhage, patch.haemorrhage);
        merge_field(&mut self.vomiting_blood, patch.vomiting_blood);
        merge_field(&mut self.vomiting_persistent, patch.vomiting_persistent);
        merge_field(&mut self.coughing_blood, patch.coughing_blood);
        merge_field(&mut self.some_unconsciousness, patch.some_unconsciousness);
        merge_field(&mut self.chest_pain, patch.chest_pain);
        merge_field(&mut self.stabbed_neck, patch.stabbed_neck);
        merge_field(&mut self.facial_dropping, patch.facial_dropping);
        merge_field(&mut self.aggression, patch.aggression);
        merge_field(&mut self.eye_injury, patch.eye_injury);
        merge_field(&mut self.poisoning_overdose, patch.poisoning_overdose);
        merge_field(&mut self.limb_cyanosis, patch.limb_cyanosis);
        merge_field(&mut self.pregnant, patch.pregnant);
        merge_field(&mut self.scale_pain, patch.scale_pain);
    }

    /// Set one finding from an untrusted string token. Returns `true` if the
    /// token named a member of the field's domain and the field was set.
    /// Unrecognized tokens leave the assessment untouched and return `false`;
    /// upstream answer text is not schema-validated, so this path must never
    /// fail outright.
    pub fn apply_raw(&mut self, finding: FindingId, token: &str) -> bool {
        match finding {
            FindingId::Breathing => set_parsed(&mut self.breathing, Breathing::from_token(token)),
            FindingId::Seizure => set_parsed(&mut self.seizure, Seizure::from_token(token)),
            FindingId::Burn => set_parsed(&mut self.burn, Burn::from_token(token)),
            FindingId::CardiacArrest => {
                set_parsed(&mut self.cardiac_arrest, bool_from_token(token))
            }
            FindingId::Fever => set_parsed(&mut self.fever, bool_from_token(token)),
            FindingId::Dislocation => {
                set_parsed(&mut self.dislocation, Dislocation::from_token(token))
            }
            FindingId::Fracture => set_parsed(&mut self.fracture, Fracture::from_token(token)),
            FindingId::Haemorrhage => {
                set_parsed(&mut self.haemorrhage, Haemorrhage::from_token(token))
            }
            FindingId::VomitingBlood => {
                set_parsed(&mut self.vomiting_blood, bool_from_token(token))
            }
            FindingId::VomitingPersistent => {
                set_parsed(&mut self.vomiting_persistent, bool_from_token(token))
            }
            FindingId::CoughingBlood => {
                set_parsed(&mut self.coughing_blood, bool_from_token(token))
            }
            FindingId::SomeUnconsciousness => {
                set_parsed(&mut self.some_unconsciousness, bool_from_token(token))
            }
            FindingId::ChestPain => set_parsed(&mut self.chest_pain, bool_from_token(token)),
            FindingId::StabbedNeck => set_parsed(&mut self.stabbed_neck, bool_from_token(token)),
            FindingId::FacialDropping => {
                set_parsed(&mut self.facial_dropping, bool_from_token(token))
            }
            FindingId::Aggression => set_parsed(&mut self.aggression, bool_from_token(token)),
            FindingId::EyeInjury => set_parsed(&mut self.eye_injury, bool_from_token(token)),
            FindingId::PoisoningOverdose => {
                set_parsed(&mut self.poisoning_overdose, bool_from_token(token))
            }
            FindingId::LimbCyanosis => {
                set_parsed(&mut self.limb_cyanosis, bool_from_token(token))
            }
            FindingId::Pregnant => set_parsed(&mut self.pregnant, bool_from_token(token)),
            FindingId::ScalePain => set_parsed(&mut self.scale_pain, PainScale::from_token(token)),
        }
    }

    /// Deterministic synthetic assessment for tests and benchmarks. Byte `i`
    /// selects the value of field `i` in [`FindingId::ALL`] order: `0` leaves
    /// the field null, any other value picks a domain member.
    pub fn synthetic(bytes: &[u8; 21]) -> MedicalAssessment {
        fn pick<T: Copy>(byte: u8, members: &[T]) -> Option<T> {
            if byte == 0 {
                None
            } else {
                Some(members[(byte as usize - 1) % members.len()])
            }
        }

        MedicalAssessment {
            breathing: pick(
                bytes[0],
                &[Breathing::Absent, Breathing::Acute, Breathing::Normal],
            ),
            seizure: pick(bytes[1], &[Seizure::Current, Seizure::Post, Seizure::Absent]),
            burn: pick(
                bytes[2],
                &[
                    Burn::Face,
                    Burn::Electrical,
                    Burn::Circumferential,
                    Burn::Chemical,
                    Burn::Other,
                    Burn::Absent,
                ],
            ),
            cardiac_arrest: pick(bytes[3], &[true, false]),
            fever: pick(bytes[4], &[true, false]),
            dislocation: pick(
                bytes[5],
                &[
                    Dislocation::LargeJoint,
                    Dislocation::FingerToe,
                    Dislocation::Absent,
                ],
            ),
            fracture: pick(
                bytes[6],
                &[Fracture::Compound, Fracture::Closed, Fracture::Absent],
            ),
            haemorrhage: pick(
                bytes[7],
                &[
                    Haemorrhage::Uncontrolled,
                    Haemorrhage::Controlled,
                    Haemorrhage::Absent,
                ],
            ),
            vomiting_blood: pick(bytes[8], &[true, false]),
            vomiting_persistent: pick(bytes[9], &[true, false]),
            coughing_blood: pick(bytes[10], &[true, false]),
            some_unconsciousness: pick(bytes[11], &[true, false]),
            chest_pain: pick(bytes[12], &[true, false]),
            stabbed_neck: pick(bytes[13], &[true, false]),
            facial_dropping: pick(bytes[14], &[true, false]),
            aggression: pick(bytes[15], &[true, false]),
            eye_injury: pick(bytes[16], &[true, false]),
            poisoning_overdose: pick(bytes[17], &[true, false]),
            limb_cyanosis: pick(bytes[18], &[true, false]),
            pregnant: pick(bytes[19], &[true, false]),
            scale_pain: pick(bytes[20], &[PainScale::Severe, PainScale::Moderate]),
        }
    }
}

fn set_parsed<T>(slot: &mut Option<T>, parsed: Option<T>) -> bool {
    match parsed {
        Some(value) => {
            *slot = Some(value);
            true
        }
        None => false,
    }
}
