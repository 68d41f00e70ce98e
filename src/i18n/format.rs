//! Format helpers for strings with interpolation.

use campus_core::lang::Language;

/// "N results" line under a filtered list.
pub fn items_found(lang: Language, n: usize) -> String {
    match lang {
        Language::Kg => format!("Табылды: {n}"),
        Language::En => match n {
            1 => "1 result".to_string(),
            _ => format!("{n} results"),
        },
        Language::Ru => format!("Найдено: {n}"),
    }
}

/// Pagination footer.
pub fn page_of(lang: Language, page: usize, pages: usize) -> String {
    match lang {
        Language::Kg => format!("Барак {page} / {pages}"),
        Language::En => format!("Page {page} of {pages}"),
        Language::Ru => format!("Страница {page} из {pages}"),
    }
}

/// Confirmation after an appeal is accepted.
pub fn appeal_sent(lang: Language, id: &str) -> String {
    match lang {
        Language::Kg => format!("Кайрылууңуз кабыл алынды (№{id})."),
        Language::En => format!("Your appeal has been received (#{id})."),
        Language::Ru => format!("Ваше обращение принято (№{id})."),
    }
}

/// Confirmation after a grant application is accepted.
pub fn grant_sent(lang: Language, id: &str) -> String {
    match lang {
        Language::Kg => format!("Грантка арызыңыз жөнөтүлдү (№{id})."),
        Language::En => format!("Your grant application has been submitted (#{id})."),
        Language::Ru => format!("Заявка на грант отправлена (№{id})."),
    }
}

/// Form rejected before submission.
pub fn invalid_field(lang: Language, field: &str, reason: &str) -> String {
    match lang {
        Language::Kg => format!("Туура эмес талаа «{field}»: {reason}"),
        Language::En => format!("Invalid field '{field}': {reason}"),
        Language::Ru => format!("Неверное поле «{field}»: {reason}"),
    }
}
