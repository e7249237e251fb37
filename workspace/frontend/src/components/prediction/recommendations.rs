use yew::prelude::*;

use crate::display::RecommendationCard;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub cards: Vec<RecommendationCard>,
}

/// One card per recommendation, in the order the service sent them.
#[function_component(Recommendations)]
pub fn recommendations(props: &Props) -> Html {
    html! {
        <div id="recommendationsList" class="grid grid-cols-1 md:grid-cols-2 gap-4">
            {for props.cards.iter().enumerate().map(|(idx, card)| html! {
                <div key={idx} class="recommendation-card card bg-base-200">
                    <div class="card-body p-4">
                        <h4 class="font-semibold">{&card.category}</h4>
                        <p class="text-sm">{&card.suggestion}</p>
                        <div class="recommendation-meta flex justify-between items-center mt-2">
                            <span class={classes!(card.badge_class(), "badge")}>{card.badge_text()}</span>
                            <span class="text-sm text-success">{&card.savings}</span>
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}
