use crate::application::http::{
    chat::router::ChatApiDoc,
    diet::router::{MealPlanApiDoc, MealsApiDoc, WinterGuideApiDoc},
    image::router::ImageApiDoc,
    nutrient::router::NutrientApiDoc,
    social::router::SocialApiDoc,
};
use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

struct AdminSecurity;

impl Modify for AdminSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CarnivoreAI Coach API"
    ),
    paths(crate::application::http::server::index::get_index),
    modifiers(&AdminSecurity),
    nest(
        (path = "/api/chat", api = ChatApiDoc),
        (path = "/api/generate-image", api = ImageApiDoc),
        (path = "/api/nutrients", api = NutrientApiDoc),
        (path = "/api/meals", api = MealsApiDoc),
        (path = "/api/meal-plan", api = MealPlanApiDoc),
        (path = "/api/winter-vitamin-guide", api = WinterGuideApiDoc),
        (path = "/api/social", api = SocialApiDoc),
    )
)]
pub struct ApiDoc;
