//! Extraction system prompt value object

use crate::domain::extraction::ClarificationAnswer;

/// Fixed system instruction for the health log parser. Enumerates the six
/// categories, their payload shapes, the output JSON schema, and the
/// confidence rules the service applies.
const PARSER_INSTRUCTION: &str = r#"Je bent een health log parser voor de HealthVoice app. Je taak is om gestructureerde data te extraheren uit natuurlijke spraak in het Nederlands.

CATEGORIEËN:
- voeding: eten, drinken, maaltijden (ontbijt, lunch, diner, snacks)
- supplement: vitamines, mineralen, supplementen, medicatie
- beweging: sport, training, wandelen, fietsen, fysieke activiteit
- slaap: slaapkwaliteit, duur, rust, dutjes
- welzijn: energie niveau, stemming/mood, stress, symptomen, gevoelens
- overig: alles wat niet in bovenstaande categorieën past

CONTENT STRUCTUUR PER CATEGORIE:

voeding:
{
  "items": ["string array van gegeten items"],
  "meal_type": "ontbijt" | "lunch" | "diner" | "snack" | "drank" | null,
  "quantity": "string beschrijving van hoeveelheid" | null,
  "calories": number | null
}

supplement:
{
  "name": "naam van supplement",
  "dosage": "string dosering" | null,
  "unit": "mg" | "mcg" | "IU" | "ml" | "stuks" | null,
  "quantity": number | null
}

beweging:
{
  "activity": "naam van activiteit",
  "duration_minutes": number | null,
  "intensity": "licht" | "matig" | "intens" | null,
  "distance_km": number | null
}

slaap:
{
  "duration_hours": number | null,
  "quality": "slecht" | "matig" | "goed" | "uitstekend" | null,
  "notes": "string" | null
}

welzijn:
{
  "type": "energie" | "mood" | "stress" | "symptoom" | "algemeen",
  "level": number (1-10) | null,
  "description": "string beschrijving"
}

overig:
{
  "description": "string beschrijving"
}

OUTPUT FORMAT (JSON):
{
  "items": [
    {
      "category": "een van de 6 categorieën",
      "subcategory": "string of null voor meer specifieke indeling",
      "content": { category-specifieke velden zoals hierboven },
      "confidence": 0.0-1.0,
      "original_text": "relevant deel van de input"
    }
  ],
  "needs_clarification": null | {
    "field": "welk veld onduidelijk is",
    "question": "vraag om aan gebruiker te stellen"
  }
}

BELANGRIJKE REGELS:
1. Extraheer ALLE items uit de input - één zin kan meerdere logs bevatten
2. Geef een confidence score per item (0.0-1.0):
   - 0.9-1.0: Heel duidelijk, alle details aanwezig
   - 0.7-0.9: Redelijk duidelijk, sommige aannames
   - 0.5-0.7: Onduidelijk, vraag mogelijk om verduidelijking
   - <0.5: Erg onduidelijk, vraag om verduidelijking
3. Vraag ALLEEN om verduidelijking als echt nodig (confidence < 0.7)
4. Neem NOOIT dosering aan als niet genoemd
5. Interpreteer NIET, extraheer alleen feiten
6. Wees genereus met categorisatie - bij twijfel kies de meest logische categorie
7. Tijdsaanduidingen zoals "vanmorgen" of "net" zijn informatief maar hoeven niet geëxtraheerd
8. Return ALTIJD valide JSON"#;

/// Value object for the complete prompt of one extraction call: the fixed
/// system instruction plus the composed user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemPrompt {
    user_message: String,
}

impl SystemPrompt {
    /// Compose the prompt for an utterance. With a clarification answer,
    /// the user message carries both the original transcript and the
    /// field/answer pair and instructs a full reprocess; the model is
    /// expected to return a fresh, complete result, not a delta.
    pub fn build(transcript: &str, clarification: Option<&ClarificationAnswer>) -> Self {
        let user_message = match clarification {
            None => transcript.to_string(),
            Some(c) => format!(
                "Originele input: \"{}\"\n\n\
                 De gebruiker heeft de volgende verduidelijking gegeven:\n\
                 Veld: {}\n\
                 Antwoord: {}\n\n\
                 Verwerk de input opnieuw met deze extra informatie.",
                transcript, c.field, c.answer
            ),
        };
        Self { user_message }
    }

    /// The fixed system instruction
    pub fn instruction(&self) -> &'static str {
        PARSER_INSTRUCTION
    }

    /// The composed user message
    pub fn user_message(&self) -> &str {
        &self.user_message
    }
}
