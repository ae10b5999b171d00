use std::rc::Rc;

use log::{info, warn};
use thiserror::Error;
use web_sys::window;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "pt" => Some(Language::Pt),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Pt => Language::En,
            Language::En => Language::Pt,
        }
    }

    /// Label of the toggle button: the language you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::Pt => "EN",
            Language::En => "PT",
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            Language::Pt => "pt-BR",
            Language::En => "en",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Language::Pt => PT,
            Language::En => EN,
        }
    }
}

const PT: &[(&str, &str)] = &[
    ("home.click", "Clique na tela"),
    ("about.title", "Olá..."),
    ("about.content", "Eu sou o João, e ajudo empresas. Com sites, automações e soluções audiovisuais!"),
    ("about.button", "Ver Projetos"),
    ("about.contact", "Fale comigo"),
    ("skills.title", "Especialidades"),
    ("skills.content", "Tecnologias e habilidades que domino:"),
    ("skills.video", "Edição"),
    ("skills.ads", "Tráfego Pago"),
    ("projects.title", "Projetos"),
    ("projects.content", "Alguns dos meus projetos desenvolvidos:"),
    ("projects.landing.title", "Landing Page"),
    ("projects.landing.description", "Desenvolvida para capturação de leads e enviado para planilha."),
    ("projects.cardapio.title", "Cardapio Digital"),
    ("projects.cardapio.description", "Utiliza LocalStorage para salvar o carrinho de compras e envia os pedidos diretamente para o WhatsApp."),
    ("projects.visual.title", "Identidade Visual"),
    ("projects.visual.description", "Identidade visual feita com elementos criados por I.A e realizada para um gateway de pagamentos."),
    ("projects.swipe", "← Deslize para ver mais projetos →"),
    ("contact.title", "Redes Sociais"),
    ("contact.content", "Quer tirar uma ideia do papel? Fale comigo!"),
    ("nav.back", "Voltar"),
    ("nav.section", "Ir para a seção"),
    ("notfound.title", "Página não encontrada"),
    ("notfound.home", "Voltar ao Início"),
    ("error.title", "Algo deu errado"),
    ("error.body", "Ocorreu um erro inesperado. Tente recarregar a página."),
    ("error.reload", "Recarregar Página"),
];

const EN: &[(&str, &str)] = &[
    ("home.click", "Click on screen"),
    ("about.title", "Hello..."),
    ("about.content", "I am João, and I help companies. With websites, automations and audiovisual solutions!"),
    ("about.button", "View Projects"),
    ("about.contact", "Talk to me"),
    ("skills.title", "Specialties"),
    ("skills.content", "Technologies and skills I master:"),
    ("skills.video", "Editing"),
    ("skills.ads", "Paid Traffic"),
    ("projects.title", "Projects"),
    ("projects.content", "Some of my developed projects:"),
    ("projects.landing.title", "Landing Page"),
    ("projects.landing.description", "Developed for lead capture and sent to spreadsheet."),
    ("projects.cardapio.title", "Digital Menu"),
    ("projects.cardapio.description", "Uses LocalStorage to save the shopping cart and sends orders directly to WhatsApp."),
    ("projects.visual.title", "Visual Identity"),
    ("projects.visual.description", "Visual identity made with elements created by A.I and developed for a payment gateway."),
    ("projects.swipe", "← Swipe to see more projects →"),
    ("contact.title", "Social Networks"),
    ("contact.content", "Want to get an idea off the ground? Talk to me!"),
    ("nav.back", "Back"),
    ("nav.section", "Go to section"),
    ("notfound.title", "Page not found"),
    ("notfound.home", "Back to start"),
    ("error.title", "Something went wrong"),
    ("error.body", "An unexpected error occurred. Try reloading the page."),
    ("error.reload", "Reload Page"),
];

/// Localized string for `key`, or `key` itself when it has no entry.
pub fn translate(language: Language, key: &str) -> String {
    language
        .table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| (*v).to_string())
        .unwrap_or_else(|| key.to_string())
}

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Where the language preference lives between visits.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, tag: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(config::LANGUAGE_STORAGE_KEY)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn save(&self, tag: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(config::LANGUAGE_STORAGE_KEY, tag)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// Stored language, ignoring values that are not a known tag.
pub fn load_language(store: &dyn PreferenceStore) -> Result<Option<Language>, StorageError> {
    Ok(store.load()?.as_deref().and_then(Language::from_tag))
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguageState {
    pub language: Language,
    /// Set once the stored preference has been read; nothing is written before.
    pub loaded: bool,
}

pub enum LanguageAction {
    Loaded(Option<Language>),
    Toggle,
}

impl Reducible for LanguageState {
    type Action = LanguageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            LanguageAction::Loaded(stored) => LanguageState {
                language: stored.unwrap_or(self.language),
                loaded: true,
            },
            LanguageAction::Toggle => LanguageState {
                language: self.language.toggled(),
                loaded: self.loaded,
            },
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

impl LanguageState {
    /// Writes the current language unless the initial load is still pending.
    /// Returns whether anything was written.
    pub fn persist(&self, store: &dyn PreferenceStore) -> Result<bool, StorageError> {
        if !self.loaded {
            return Ok(false);
        }
        store.save(self.language.tag())?;
        Ok(true)
    }
}

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    pub on_toggle: Callback<()>,
}

impl LanguageContext {
    pub fn t(&self, key: &str) -> String {
        translate(self.language, key)
    }

    pub fn toggle(&self) {
        self.on_toggle.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageProviderProps {
    pub children: Children,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &LanguageProviderProps) -> Html {
    let state = use_reducer(LanguageState::default);

    // Read the stored preference once on mount
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let stored = match load_language(&BrowserStorage) {
                    Ok(stored) => stored,
                    Err(e) => {
                        warn!("could not read language preference: {}", e);
                        None
                    }
                };
                info!("language preference loaded: {:?}", stored);
                state.dispatch(LanguageAction::Loaded(stored));
                || ()
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            move |state: &LanguageState| {
                if let Err(e) = state.persist(&BrowserStorage) {
                    warn!("could not save language preference: {}", e);
                }
                if let Some(root) = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                {
                    let _ = root.set_attribute("lang", state.language.html_lang());
                }
                || ()
            },
            (*state).clone(),
        );
    }

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(LanguageAction::Toggle))
    };

    let context = LanguageContext {
        language: state.language,
        on_toggle,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<LanguageContext>>
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("use_language must be used within a LanguageProvider")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
        writes: RefCell<usize>,
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Ok(self.value.borrow().clone())
        }

        fn save(&self, tag: &str) -> Result<(), StorageError> {
            *self.value.borrow_mut() = Some(tag.to_string());
            *self.writes.borrow_mut() += 1;
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn save(&self, _tag: &str) -> Result<(), StorageError> {
            Err(StorageError::Access("quota exceeded".into()))
        }
    }

    fn reduce(state: LanguageState, action: LanguageAction) -> LanguageState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(translate(Language::Pt, "missing.key"), "missing.key");
        assert_eq!(translate(Language::En, ""), "");
    }

    #[test]
    fn known_keys_are_localized() {
        assert_eq!(translate(Language::Pt, "home.click"), "Clique na tela");
        assert_eq!(translate(Language::En, "home.click"), "Click on screen");
    }

    #[test]
    fn both_tables_cover_the_same_keys() {
        let mut pt: Vec<_> = PT.iter().map(|(k, _)| *k).collect();
        let mut en: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
        pt.sort_unstable();
        en.sort_unstable();
        assert_eq!(pt, en);
    }

    #[test]
    fn toggling_twice_restores_the_strings() {
        let start = LanguageState { language: Language::Pt, loaded: true };
        let once = reduce(start.clone(), LanguageAction::Toggle);
        assert_eq!(once.language, Language::En);
        let twice = reduce(once, LanguageAction::Toggle);
        assert_eq!(twice, start);
        for (key, value) in PT {
            assert_eq!(translate(twice.language, key), *value);
        }
    }

    #[test]
    fn tags_round_trip_and_reject_unknown() {
        for lang in [Language::Pt, Language::En] {
            assert_eq!(Language::from_tag(lang.tag()), Some(lang));
        }
        assert_eq!(Language::from_tag("de"), None);
        assert_eq!(Language::Pt.toggle_label(), "EN");
    }

    #[test]
    fn nothing_is_written_before_the_initial_load() {
        let store = MemoryStore::default();
        *store.value.borrow_mut() = Some("en".into());

        let fresh = LanguageState::default();
        assert_eq!(fresh.persist(&store), Ok(false));
        assert_eq!(*store.writes.borrow(), 0);
        assert_eq!(store.value.borrow().as_deref(), Some("en"));

        let loaded = reduce(fresh, LanguageAction::Loaded(load_language(&store).unwrap()));
        assert_eq!(loaded.language, Language::En);
        assert_eq!(loaded.persist(&store), Ok(true));
        assert_eq!(store.value.borrow().as_deref(), Some("en"));

        let toggled = reduce(loaded, LanguageAction::Toggle);
        toggled.persist(&store).unwrap();
        assert_eq!(store.value.borrow().as_deref(), Some("pt"));
    }

    #[test]
    fn unknown_stored_tag_keeps_the_default() {
        let store = MemoryStore::default();
        *store.value.borrow_mut() = Some("klingon".into());
        assert_eq!(load_language(&store), Ok(None));
        let state = reduce(LanguageState::default(), LanguageAction::Loaded(None));
        assert_eq!(state.language, Language::Pt);
        assert!(state.loaded);
    }

    #[test]
    fn storage_errors_surface_as_values() {
        assert_eq!(load_language(&BrokenStore), Err(StorageError::Unavailable));
        let loaded = LanguageState { language: Language::En, loaded: true };
        assert!(matches!(loaded.persist(&BrokenStore), Err(StorageError::Access(_))));
    }
}
