use crate::i18n::Text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromoKind {
    Discount,
    NewItem,
    Event,
    Bonus,
}

impl PromoKind {
    pub fn icon(self) -> &'static str {
        match self {
            PromoKind::Discount => "🏷",
            PromoKind::NewItem => "✨",
            PromoKind::Event => "🎉",
            PromoKind::Bonus => "⭐",
        }
    }

    /// Accent colour as RGB.
    pub fn accent(self) -> [u8; 3] {
        match self {
            PromoKind::Discount => [230, 57, 70],
            PromoKind::NewItem => [244, 162, 97],
            PromoKind::Event => [42, 157, 143],
            PromoKind::Bonus => [233, 196, 106],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoCard {
    pub kind: PromoKind,
    pub title: Text,
    pub body: Text,
    /// Whether the home view shows the promo countdown under this card.
    pub timed: bool,
}

pub fn promo_cards() -> [PromoCard; 4] {
    [
        PromoCard {
            kind: PromoKind::Discount,
            title: Text::PromoDiscountTitle,
            body: Text::PromoDiscountBody,
            timed: true,
        },
        PromoCard {
            kind: PromoKind::NewItem,
            title: Text::PromoNewItemTitle,
            body: Text::PromoNewItemBody,
            timed: false,
        },
        PromoCard {
            kind: PromoKind::Event,
            title: Text::PromoEventTitle,
            body: Text::PromoEventBody,
            timed: false,
        },
        PromoCard {
            kind: PromoKind::Bonus,
            title: Text::PromoBonusTitle,
            body: Text::PromoBonusBody,
            timed: true,
        },
    ]
}
