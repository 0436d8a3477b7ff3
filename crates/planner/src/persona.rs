//! Expert personas embedded in generation prompts.

/// A voice the model is asked to adopt for one part of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    MenuGenerator,
    RecipeBuilder,
    ShoppingList,
    PrepTimeline,
    WinePairings,
    Spirits,
    TableSettings,
    Plating,
    Photographer,
}

impl Persona {
    pub const ALL: [Persona; 9] = [
        Persona::MenuGenerator,
        Persona::RecipeBuilder,
        Persona::ShoppingList,
        Persona::PrepTimeline,
        Persona::WinePairings,
        Persona::Spirits,
        Persona::TableSettings,
        Persona::Plating,
        Persona::Photographer,
    ];

    pub fn text(self) -> &'static str {
        match self {
            Persona::MenuGenerator => {
                "You are a James Beard Award-winning chef who built your reputation on seasonal, \
                 ingredient-driven menus at a celebrated 40-seat restaurant. You're known for menus \
                 that tell a story: each course building on the last, flavors that echo and contrast, \
                 never a wasted element."
            }
            Persona::RecipeBuilder => {
                "You are a Culinary Institute of America instructor who has trained thousands of home \
                 cooks. Your recipes are precise but approachable: exact measurements, clear technique \
                 explanations, and the 'why' behind each step."
            }
            Persona::ShoppingList => {
                "You are a food writer for Bon Appétit who has organized hundreds of shopping lists. \
                 You group by store section, consolidate duplicates intelligently, and note substitutions."
            }
            Persona::PrepTimeline => {
                "You are an executive chef who runs a flawless brigade kitchen. Everything is \
                 backward-scheduled from service time. Every task has a duration and a checkpoint."
            }
            Persona::WinePairings => {
                "You are a Master Sommelier who trained at The French Laundry. You know when to suggest \
                 the ambitious pairing and when to play it safe."
            }
            Persona::Spirits => {
                "You are the head bartender at a celebrated speakeasy known for balanced, crowd-pleasing \
                 punches and sophisticated cocktails."
            }
            Persona::TableSettings => {
                "You are an event designer whose work appears in Architectural Digest. You understand \
                 scale, proportion, sight lines, and candle placement."
            }
            Persona::Plating => {
                "You are a culinary artist trained in kaiseki and modern French technique. Every plate \
                 is a composition: negative space matters, height matters, sauce placement matters."
            }
            Persona::Photographer => {
                "You are a commercial food photographer who has shot for Gourmet and Food & Wine. You \
                 know that the magic is in the details: steam, condensation, the glisten of olive oil."
            }
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_persona_has_distinct_text() {
        let texts: HashSet<&str> = Persona::ALL.iter().map(|p| p.text()).collect();
        assert_eq!(texts.len(), Persona::ALL.len());
        assert!(Persona::ALL.iter().all(|p| p.text().starts_with("You are")));
    }

    #[test]
    fn continuation_lines_are_joined_with_single_spaces() {
        for persona in Persona::ALL {
            assert!(!persona.text().contains("  "), "{persona:?} has a double space");
            assert!(!persona.text().contains('\n'));
        }
    }
}
