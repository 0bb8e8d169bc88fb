//! Fixed instruction text for the two model calls

use crate::types::PromptProfile;

/// Builds the natural-language instructions sent with each model call
///
/// The wording is fixed; the profile only fills in the culinary tradition,
/// the answer language and the number of recipes per batch.
#[derive(Clone, Debug, Default)]
pub struct PromptBuilder {
    profile: PromptProfile,
}

impl PromptBuilder {
    /// Create a builder for the given profile
    pub fn new(profile: PromptProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &PromptProfile {
        &self.profile
    }

    /// Instruction for the recognition call
    ///
    /// Directs the model to enumerate only the food ingredients visible in
    /// the attached image, in the profile language, without elaboration.
    pub fn recognition_instruction(&self) -> String {
        format!(
            "Analyze this image and identify every visible food ingredient. \
             Return only a list of ingredient names in {}, without descriptions.",
            self.profile.language
        )
    }

    /// Instruction for the generation call
    ///
    /// Carries the mandatory rules: classic regional tradition only, every
    /// quantity rescaled to the serving count, supplied ingredients may be
    /// skipped when irrelevant, missing-but-essential ingredients must be
    /// added (scaled as well), and a fixed answer language.
    pub fn generation_instruction(&self, ingredients: &[String], servings: u32) -> String {
        let PromptProfile {
            cuisine,
            language,
            recipe_count,
        } = &self.profile;
        let ingredient_list = ingredients.join(", ");

        format!(
            r#"You are an expert in classic {cuisine} cuisine.
Suggest {recipe_count} recipes from the classic {cuisine} tradition based on this ingredient list: {ingredient_list}.

MANDATORY RULES:
1. SCALE THE QUANTITIES: ingredient quantities must be calculated exactly for {servings} people.
2. Suggest exclusively dishes from the classic {cuisine} tradition.
3. A recipe does NOT have to use ALL the supplied ingredients. Use only the ones relevant to the classic dish.
4. If ingredients essential to the classic version are missing, include them anyway, with quantities for {servings} people.
5. For each recipe, provide an image URL (imageUrl) specific to the dish.
6. Answer exclusively in {language}."#
        )
    }
}
