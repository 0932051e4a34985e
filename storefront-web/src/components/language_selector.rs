use i18nrs::yew::use_translation;
use yew::{Callback, Html, function_component, html, use_effect_with, use_state_eq};

use crate::components::language_selector_button::LanguageSelectorButton;
use crate::language::{self, DEFAULT_LANGUAGE};

#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let current = use_state_eq(|| i18n.get_current_language().to_string());

    {
        let current = current.clone();
        use_effect_with(i18n, move |i18n| {
            current.set(i18n.get_current_language().to_string());
            || ()
        });
    }

    let on_select = {
        let current = current.clone();
        Callback::from(move |code: String| {
            current.set(code.clone());
            set_language.emit(code);
        })
    };

    let active = language::get_language_info(&current)
        .or_else(|| language::get_language_info(DEFAULT_LANGUAGE));
    let languages = language::sorted_languages();

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <span>{active.map_or("", |info| info.flag)}</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-44">
                { for languages.into_iter().map(|info| html! {
                    <LanguageSelectorButton
                        is_active={info.code == current.as_str()}
                        info={info}
                        on_click={on_select.clone()}
                    />
                }) }
            </ul>
        </div>
    }
}
