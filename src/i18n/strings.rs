//! Centralized localized strings for user-facing output.
//!
//! These are the static defaults the site renders before (or instead of) API
//! content: form feedback messages, loading indicators, and the four contact
//! card placeholders that the content merger overlays with `fields/` data.

use crate::i18n::Locale;

/// Static content for one contact card placeholder.
///
/// Icon names refer to the site's icon set (lucide); this crate only carries
/// them through, it never interprets them.
#[derive(Debug, Clone)]
pub struct CardStrings {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub contact: &'static str,
    pub action: &'static str,
}

/// All localized user-facing strings for a locale
#[derive(Debug, Clone)]
pub struct LocaleStrings {
    // ==================== Page States ====================
    /// Shown while initial page data is being fetched
    pub loading: &'static str,

    /// Shown when a content fetch failed and the page fell back to defaults
    pub content_unavailable: &'static str,

    // ==================== Newsletter Subscription ====================
    /// Validation message when the email field is empty
    pub email_required: &'static str,

    /// Validation message when the email is malformed
    pub email_invalid: &'static str,

    /// Shown after a successful subscription
    pub subscribe_success: &'static str,

    /// Shown when the subscription request was rejected
    pub subscribe_failed: &'static str,

    // ==================== Contact Form ====================
    /// Validation message when the message body is empty
    pub message_required: &'static str,

    /// Shown after the contact message was accepted
    pub message_sent: &'static str,

    /// Shown when sending the contact message failed
    pub message_failed: &'static str,

    // ==================== Job Application ====================
    /// Shown after the application was accepted
    pub application_sent: &'static str,

    /// Shown when submitting the application failed
    pub application_failed: &'static str,

    // ==================== Contact Cards ====================
    /// Static defaults for the four contact cards, in display order.
    /// API `fields/` records overlay these positionally.
    pub contact_cards: [CardStrings; 4],
}

/// Get the string table for a locale.
pub fn strings_for(locale: Locale) -> &'static LocaleStrings {
    match locale.code() {
        "en" => &ENGLISH_STRINGS,
        "ru" => &RUSSIAN_STRINGS,
        _ => &UZBEK_STRINGS,
    }
}

// ==================== Uzbek Strings (fallback) ====================

pub const UZBEK_STRINGS: LocaleStrings = LocaleStrings {
    loading: "Yuklanmoqda...",
    content_unavailable: "Ma'lumotlarni yuklab bo'lmadi",

    email_required: "Email kiritilishi kerak!",
    email_invalid: "Email noto'g'ri kiritilgan",
    subscribe_success: "Obuna bo'ldingiz!",
    subscribe_failed: "Obuna bo'lishda xatolik yuz berdi",

    message_required: "Xabar matni kiritilishi kerak!",
    message_sent: "Xabaringiz yuborildi!",
    message_failed: "Xabar yuborishda xatolik yuz berdi",

    application_sent: "Arizangiz yuborildi",
    application_failed: "Ariza yuborishda xatolik yuz berdi",

    contact_cards: [
        CardStrings {
            icon: "Mail",
            title: "Email",
            description: "Bizga istalgan vaqtda yozing",
            contact: "info@devosoft.uz",
            action: "mailto:info@devosoft.uz",
        },
        CardStrings {
            icon: "Phone",
            title: "Telefon",
            description: "Ish kunlari qo'ng'iroq qiling",
            contact: "+998 90 123 45 67",
            action: "tel:+998901234567",
        },
        CardStrings {
            icon: "MapPin",
            title: "Manzil",
            description: "Ofisimizga tashrif buyuring",
            contact: "Toshkent, Mustaqillik ko'chasi 12",
            action: "#map",
        },
        CardStrings {
            icon: "Clock",
            title: "Ish vaqti",
            description: "Dushanba - Juma",
            contact: "9:00 - 18:00",
            action: "#",
        },
    ],
};

// ==================== English Strings ====================

pub const ENGLISH_STRINGS: LocaleStrings = LocaleStrings {
    loading: "Loading...",
    content_unavailable: "Content could not be loaded",

    email_required: "Email is required!",
    email_invalid: "Email address is not valid",
    subscribe_success: "You are subscribed!",
    subscribe_failed: "Subscription failed, please try again",

    message_required: "Message text is required!",
    message_sent: "Your message has been sent!",
    message_failed: "Failed to send your message",

    application_sent: "Your application has been submitted",
    application_failed: "Failed to submit your application",

    contact_cards: [
        CardStrings {
            icon: "Mail",
            title: "Email",
            description: "Write to us any time",
            contact: "info@devosoft.uz",
            action: "mailto:info@devosoft.uz",
        },
        CardStrings {
            icon: "Phone",
            title: "Phone",
            description: "Call us on business days",
            contact: "+998 90 123 45 67",
            action: "tel:+998901234567",
        },
        CardStrings {
            icon: "MapPin",
            title: "Address",
            description: "Visit our office",
            contact: "Tashkent, Mustaqillik street 12",
            action: "#map",
        },
        CardStrings {
            icon: "Clock",
            title: "Working hours",
            description: "Monday - Friday",
            contact: "9:00 - 18:00",
            action: "#",
        },
    ],
};

// ==================== Russian Strings ====================

pub const RUSSIAN_STRINGS: LocaleStrings = LocaleStrings {
    loading: "Загрузка...",
    content_unavailable: "Не удалось загрузить данные",

    email_required: "Email обязателен!",
    email_invalid: "Некорректный email",
    subscribe_success: "Вы подписаны!",
    subscribe_failed: "Ошибка при подписке",

    message_required: "Текст сообщения обязателен!",
    message_sent: "Ваше сообщение отправлено!",
    message_failed: "Не удалось отправить сообщение",

    application_sent: "Ваша заявка отправлена",
    application_failed: "Не удалось отправить заявку",

    contact_cards: [
        CardStrings {
            icon: "Mail",
            title: "Email",
            description: "Напишите нам в любое время",
            contact: "info@devosoft.uz",
            action: "mailto:info@devosoft.uz",
        },
        CardStrings {
            icon: "Phone",
            title: "Телефон",
            description: "Звоните в рабочие дни",
            contact: "+998 90 123 45 67",
            action: "tel:+998901234567",
        },
        CardStrings {
            icon: "MapPin",
            title: "Адрес",
            description: "Посетите наш офис",
            contact: "Ташкент, ул. Мустакиллик 12",
            action: "#map",
        },
        CardStrings {
            icon: "Clock",
            title: "Часы работы",
            description: "Понедельник - Пятница",
            contact: "9:00 - 18:00",
            action: "#",
        },
    ],
};
