//! Static labels: section titles, field captions, page states.

use campus_core::lang::Language;

pub(super) fn lookup(key: &str, lang: Language) -> Option<&'static str> {
    use Language::*;
    let s = match key {
        // --- Sections ---
        "about" => match lang {
            Kg => "Университет жөнүндө",
            En => "About the University",
            Ru => "Об университете",
        },
        "admissions" => match lang {
            Kg => "Кабыл алуу",
            En => "Admissions",
            Ru => "Поступление",
        },
        "infrastructure" => match lang {
            Kg => "Инфраструктура",
            En => "Infrastructure",
            Ru => "Инфраструктура",
        },
        "student_life" => match lang {
            Kg => "Студенттик турмуш",
            En => "Student Life",
            Ru => "Студенческая жизнь",
        },
        "research" => match lang {
            Kg => "Илим",
            En => "Research",
            Ru => "Наука",
        },
        "news" => match lang {
            Kg => "Жаңылыктар",
            En => "News",
            Ru => "Новости",
        },
        "navbar" => match lang {
            Kg => "Меню",
            En => "Menu",
            Ru => "Меню",
        },
        "gallery" => match lang {
            Kg => "Галерея",
            En => "Gallery",
            Ru => "Галерея",
        },

        // --- Blocks ---
        "leadership" => match lang {
            Kg => "Жетекчилик",
            En => "Leadership",
            Ru => "Руководство",
        },
        "programs" => match lang {
            Kg => "Билим берүү программалары",
            En => "Programs",
            Ru => "Образовательные программы",
        },
        "faq" => match lang {
            Kg => "Көп берилүүчү суроолор",
            En => "Frequently Asked Questions",
            Ru => "Частые вопросы",
        },
        "facilities" => match lang {
            Kg => "Объекттер",
            En => "Facilities",
            Ru => "Объекты",
        },
        "clubs" => match lang {
            Kg => "Клубдар",
            En => "Clubs",
            Ru => "Клубы",
        },
        "events" => match lang {
            Kg => "Иш-чаралар",
            En => "Events",
            Ru => "Мероприятия",
        },
        "grants" => match lang {
            Kg => "Гранттар",
            En => "Grants",
            Ru => "Гранты",
        },
        "publications" => match lang {
            Kg => "Басылмалар",
            En => "Publications",
            Ru => "Публикации",
        },
        "photos" => match lang {
            Kg => "Сүрөттөр",
            En => "Photos",
            Ru => "Фотографии",
        },
        "categories" => match lang {
            Kg => "Категориялар",
            En => "Categories",
            Ru => "Категории",
        },

        // --- Field captions ---
        "degree" => match lang {
            Kg => "Даража",
            En => "Degree",
            Ru => "Степень",
        },
        "duration" => match lang {
            Kg => "Окуу мөөнөтү",
            En => "Duration",
            Ru => "Срок обучения",
        },
        "tuition" => match lang {
            Kg => "Окуу акысы",
            En => "Tuition",
            Ru => "Стоимость",
        },
        "deadline" => match lang {
            Kg => "Акыркы мөөнөт",
            En => "Deadline",
            Ru => "Срок подачи",
        },
        "benefits" => match lang {
            Kg => "Артыкчылыктар",
            En => "Benefits",
            Ru => "Преимущества",
        },
        "requirements" => match lang {
            Kg => "Талаптар",
            En => "Requirements",
            Ru => "Требования",
        },
        "date" => match lang {
            Kg => "Күнү",
            En => "Date",
            Ru => "Дата",
        },
        "location" => match lang {
            Kg => "Орду",
            En => "Location",
            Ru => "Место",
        },
        "address" => match lang {
            Kg => "Дареги",
            En => "Address",
            Ru => "Адрес",
        },
        "capacity" => match lang {
            Kg => "Сыйымдуулугу",
            En => "Capacity",
            Ru => "Вместимость",
        },
        "contact" => match lang {
            Kg => "Байланыш",
            En => "Contact",
            Ru => "Контакты",
        },
        "amount" => match lang {
            Kg => "Суммасы",
            En => "Amount",
            Ru => "Сумма",
        },
        "status" => match lang {
            Kg => "Абалы",
            En => "Status",
            Ru => "Статус",
        },
        "authors" => match lang {
            Kg => "Авторлор",
            En => "Authors",
            Ru => "Авторы",
        },
        "year" => match lang {
            Kg => "Жылы",
            En => "Year",
            Ru => "Год",
        },
        "journal" => match lang {
            Kg => "Журнал",
            En => "Journal",
            Ru => "Журнал",
        },
        "download" => match lang {
            Kg => "Жүктөп алуу",
            En => "Download",
            Ru => "Скачать",
        },
        "category" => match lang {
            Kg => "Категория",
            En => "Category",
            Ru => "Категория",
        },
        "email" => match lang {
            Kg => "Эл. почта",
            En => "Email",
            Ru => "Эл. почта",
        },
        "founded" => match lang {
            Kg => "Негизделген",
            En => "Founded",
            Ru => "Основан",
        },

        // --- Page states ---
        "loading" => match lang {
            Kg => "Жүктөлүүдө...",
            En => "Loading...",
            Ru => "Загрузка...",
        },
        "error_generic" => match lang {
            Kg => "Маалыматты жүктөөдө ката кетти.",
            En => "Failed to load data.",
            Ru => "Не удалось загрузить данные.",
        },
        "retry_hint" => match lang {
            Kg => "Кийинчерээк кайра аракет кылыңыз.",
            En => "Please try again later.",
            Ru => "Попробуйте ещё раз позже.",
        },
        "no_data" => match lang {
            Kg => "Азырынча маалымат жок.",
            En => "No information yet.",
            Ru => "Информация пока отсутствует.",
        },
        "nothing_found" => match lang {
            Kg => "Эч нерсе табылган жок.",
            En => "Nothing found.",
            Ru => "Ничего не найдено.",
        },

        // --- Status ---
        "status_header" => match lang {
            Kg => "Портал абалы",
            En => "Portal status",
            Ru => "Состояние портала",
        },
        "backend" => match lang {
            Kg => "Сервер",
            En => "Backend",
            Ru => "Сервер",
        },
        "available" => match lang {
            Kg => "жеткиликтүү",
            En => "available",
            Ru => "доступен",
        },
        "unavailable" => match lang {
            Kg => "жеткиликсиз",
            En => "unavailable",
            Ru => "недоступен",
        },
        "language_label" => match lang {
            Kg => "Тил:",
            En => "Language:",
            Ru => "Язык:",
        },
        _ => return None,
    };
    Some(s)
}
