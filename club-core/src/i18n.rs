//! Fixed bilingual string tables. Every label the UI shows is a [`Text`]
//! variant, so a missing translation is a compile error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Ru => "RU",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Text {
    // Navigation
    NavHome,
    NavShop,
    NavGames,
    NavProfile,
    SignIn,
    SignOut,
    Points,

    // Verification wizard
    WizardTitle,
    ContactPrompt,
    ContactHint,
    SendCode,
    CodePrompt,
    ConfirmCode,
    NamePrompt,
    GenerateName,
    CreateProfile,
    Welcome,
    PleaseWait,
    Close,

    // Home
    HomeHeadline,
    HomeTagline,
    PromoEndsIn,
    PromoExpired,
    PromoDiscountTitle,
    PromoDiscountBody,
    PromoNewItemTitle,
    PromoNewItemBody,
    PromoEventTitle,
    PromoEventBody,
    PromoBonusTitle,
    PromoBonusBody,

    // Shop
    ShopTitle,
    Buy,
    InStock,
    OutOfStock,
    SignInToBuy,
    PurchaseDone,
    NotEnoughPoints,
    ItemFreeSlice,
    ItemGarlicKnots,
    ItemLemonade,
    ItemTiramisu,
    ItemFamilyPizza,
    ItemClubTShirt,

    // Games
    GamesTitle,
    WheelTitle,
    Spin,
    Spinning,
    NextSpinIn,
    YouWon,
    MemoryTitle,
    Moves,
    NewRound,
    RoundWon,

    // Profile
    ProfileTitle,
    Rank,
    RankRookie,
    RankRegular,
    RankGourmet,
    RankLegend,
    Inventory,
    PurchaseHistory,
    Empty,
    SignInRequired,
}

pub fn tr(lang: Language, text: Text) -> &'static str {
    match lang {
        Language::En => en(text),
        Language::Ru => ru(text),
    }
}

fn en(text: Text) -> &'static str {
    match text {
        Text::NavHome => "Home",
        Text::NavShop => "Rewards Shop",
        Text::NavGames => "Games",
        Text::NavProfile => "Profile",
        Text::SignIn => "Join the Club",
        Text::SignOut => "Sign out",
        Text::Points => "points",

        Text::WizardTitle => "Pizza Club sign-up",
        Text::ContactPrompt => "Your phone number",
        Text::ContactHint => "We'll text you a confirmation code",
        Text::SendCode => "Send code",
        Text::CodePrompt => "Enter the 4-digit code",
        Text::ConfirmCode => "Confirm",
        Text::NamePrompt => "Pick a display name",
        Text::GenerateName => "Surprise me",
        Text::CreateProfile => "Create profile",
        Text::Welcome => "Welcome to the club!",
        Text::PleaseWait => "Please wait...",
        Text::Close => "Close",

        Text::HomeHeadline => "Hot slices, hotter rewards",
        Text::HomeTagline => "Earn points with every order and spend them in the shop",
        Text::PromoEndsIn => "Offer ends in",
        Text::PromoExpired => "Offer has ended",
        Text::PromoDiscountTitle => "Two for Tuesday",
        Text::PromoDiscountBody => "Second large pizza at half price",
        Text::PromoNewItemTitle => "New: Truffle Bianca",
        Text::PromoNewItemBody => "White base, mushrooms, truffle oil",
        Text::PromoEventTitle => "Dough-throwing night",
        Text::PromoEventBody => "Friday at 7pm, all members welcome",
        Text::PromoBonusTitle => "Double points weekend",
        Text::PromoBonusBody => "Every order earns twice the points",

        Text::ShopTitle => "Rewards Shop",
        Text::Buy => "Redeem",
        Text::InStock => "in stock",
        Text::OutOfStock => "Out of stock",
        Text::SignInToBuy => "Join the club to redeem rewards",
        Text::PurchaseDone => "Redeemed!",
        Text::NotEnoughPoints => "Not enough points",
        Text::ItemFreeSlice => "Free slice",
        Text::ItemGarlicKnots => "Garlic knots",
        Text::ItemLemonade => "House lemonade",
        Text::ItemTiramisu => "Tiramisu",
        Text::ItemFamilyPizza => "Family-size pizza",
        Text::ItemClubTShirt => "Club T-shirt",

        Text::GamesTitle => "Mini-games",
        Text::WheelTitle => "Wheel of Toppings",
        Text::Spin => "Spin",
        Text::Spinning => "Spinning...",
        Text::NextSpinIn => "Next spin in",
        Text::YouWon => "You won",
        Text::MemoryTitle => "Ingredient memory",
        Text::Moves => "Moves",
        Text::NewRound => "New round",
        Text::RoundWon => "All pairs found!",

        Text::ProfileTitle => "Your profile",
        Text::Rank => "Rank",
        Text::RankRookie => "Rookie",
        Text::RankRegular => "Regular",
        Text::RankGourmet => "Gourmet",
        Text::RankLegend => "Legend",
        Text::Inventory => "Inventory",
        Text::PurchaseHistory => "Purchase history",
        Text::Empty => "Nothing here yet",
        Text::SignInRequired => "Join the club to see this page",
    }
}

fn ru(text: Text) -> &'static str {
    match text {
        Text::NavHome => "Главная",
        Text::NavShop => "Магазин наград",
        Text::NavGames => "Игры",
        Text::NavProfile => "Профиль",
        Text::SignIn => "Вступить в клуб",
        Text::SignOut => "Выйти",
        Text::Points => "баллов",

        Text::WizardTitle => "Регистрация в клубе",
        Text::ContactPrompt => "Ваш номер телефона",
        Text::ContactHint => "Мы отправим код подтверждения",
        Text::SendCode => "Отправить код",
        Text::CodePrompt => "Введите 4-значный код",
        Text::ConfirmCode => "Подтвердить",
        Text::NamePrompt => "Выберите имя",
        Text::GenerateName => "Придумать за меня",
        Text::CreateProfile => "Создать профиль",
        Text::Welcome => "Добро пожаловать в клуб!",
        Text::PleaseWait => "Подождите...",
        Text::Close => "Закрыть",

        Text::HomeHeadline => "Горячая пицца, ещё горячее награды",
        Text::HomeTagline => "Копите баллы с каждым заказом и тратьте их в магазине",
        Text::PromoEndsIn => "До конца акции",
        Text::PromoExpired => "Акция завершена",
        Text::PromoDiscountTitle => "Вторник два по цене полутора",
        Text::PromoDiscountBody => "Вторая большая пицца за полцены",
        Text::PromoNewItemTitle => "Новинка: Бьянка с трюфелем",
        Text::PromoNewItemBody => "Белая основа, грибы, трюфельное масло",
        Text::PromoEventTitle => "Вечер подбрасывания теста",
        Text::PromoEventBody => "В пятницу в 19:00, ждём всех участников",
        Text::PromoBonusTitle => "Выходные двойных баллов",
        Text::PromoBonusBody => "Каждый заказ приносит вдвое больше баллов",

        Text::ShopTitle => "Магазин наград",
        Text::Buy => "Обменять",
        Text::InStock => "в наличии",
        Text::OutOfStock => "Нет в наличии",
        Text::SignInToBuy => "Вступите в клуб, чтобы обменивать баллы",
        Text::PurchaseDone => "Готово!",
        Text::NotEnoughPoints => "Недостаточно баллов",
        Text::ItemFreeSlice => "Бесплатный кусочек",
        Text::ItemGarlicKnots => "Чесночные узелки",
        Text::ItemLemonade => "Домашний лимонад",
        Text::ItemTiramisu => "Тирамису",
        Text::ItemFamilyPizza => "Семейная пицца",
        Text::ItemClubTShirt => "Футболка клуба",

        Text::GamesTitle => "Мини-игры",
        Text::WheelTitle => "Колесо начинок",
        Text::Spin => "Крутить",
        Text::Spinning => "Крутится...",
        Text::NextSpinIn => "Следующая попытка через",
        Text::YouWon => "Ваш выигрыш",
        Text::MemoryTitle => "Найди пару",
        Text::Moves => "Ходы",
        Text::NewRound => "Новый раунд",
        Text::RoundWon => "Все пары найдены!",

        Text::ProfileTitle => "Ваш профиль",
        Text::Rank => "Ранг",
        Text::RankRookie => "Новичок",
        Text::RankRegular => "Завсегдатай",
        Text::RankGourmet => "Гурман",
        Text::RankLegend => "Легенда",
        Text::Inventory => "Инвентарь",
        Text::PurchaseHistory => "История покупок",
        Text::Empty => "Здесь пока пусто",
        Text::SignInRequired => "Вступите в клуб, чтобы открыть эту страницу",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_switches_between_both_languages() {
        assert_eq!(Language::En.toggle(), Language::Ru);
        assert_eq!(Language::Ru.toggle(), Language::En);
    }

    #[test]
    fn tables_differ_per_language() {
        assert_eq!(tr(Language::En, Text::SendCode), "Send code");
        assert_eq!(tr(Language::Ru, Text::SendCode), "Отправить код");
        assert_ne!(
            tr(Language::En, Text::WizardTitle),
            tr(Language::Ru, Text::WizardTitle)
        );
    }
}
