//! Bilingual interface labels.

use evdash_core::i18n::Label;

pub const APP_TITLE: Label = Label::new("Event Dashboard", "لوحة الأحداث");
pub const EVENTS: Label = Label::new("Events", "الأحداث");
pub const REGION: Label = Label::new("Region", "المنطقة");
pub const TYPE: Label = Label::new("Type", "النوع");
pub const ALL_REGIONS: Label = Label::new("All Regions", "كل المناطق");
pub const ALL_TYPES: Label = Label::new("All Types", "كل الأنواع");
pub const NO_MATCHING_EVENTS: Label = Label::new("No events match the filters", "لا توجد أحداث مطابقة");
pub const SELECT_EVENT: Label = Label::new("Select an event to see details", "اختر حدثًا لعرض التفاصيل");
pub const FILTERS: Label = Label::new("Filters", "التصفية");

// Hero
pub const DATES: Label = Label::new("Dates", "التواريخ");
pub const DURATION: Label = Label::new("Duration", "المدة");
pub const LOCATION: Label = Label::new("Location", "الموقع");
pub const MODE: Label = Label::new("Mode", "النمط");
pub const WEBSITE: Label = Label::new("Website", "الموقع");
pub const REGISTER: Label = Label::new("Register", "التسجيل");
pub const BROCHURE: Label = Label::new("Brochure", "الكتيب");

// Overview
pub const DESCRIPTION: Label = Label::new("Description", "الوصف");
pub const FEATURED_SESSIONS: Label = Label::new("Featured Sessions", "الجلسات المميزة");
pub const MAJOR_TOPICS: Label = Label::new("Major Topics", "المواضيع الرئيسية");
pub const EVENT_MODE: Label = Label::new("Event Mode", "نمط الحدث");
pub const TARGET_INDUSTRY: Label = Label::new("Target Industry", "الصناعة المستهدفة");
pub const TARGET_ROLES: Label = Label::new("Target Roles", "الأدوار المستهدفة");
pub const TAGS: Label = Label::new("Tags", "العلامات");
pub const GOVERNMENT_ENDORSEMENTS: Label =
    Label::new("Government Endorsements", "التأييدات الحكومية");
pub const CATEGORIES: Label = Label::new("Categories", "الفئات");
pub const MAIN_SECTORS: Label = Label::new("Main Sectors", "القطاعات الرئيسية");
pub const EVENT_SUMMARY: Label = Label::new("Event Summary", "ملخص الحدث");
pub const TOPIC_COVERAGE: Label = Label::new("Major Topics Coverage", "تغطية المواضيع الرئيسية");
pub const CATEGORIES_BREAKDOWN: Label = Label::new("Categories Breakdown", "تفصيل الفئات");
pub const SESSION_TYPES: Label = Label::new("Speakers by Session Type", "المتحدثون حسب نوع الجلسة");
pub const SPONSORSHIP_ROLES: Label = Label::new("Participants by Role", "المشاركون حسب الدور");
pub const TOPICS_3D: Label = Label::new("3D Topics Overview", "نظرة عامة ثلاثية الأبعاد للمواضيع");
pub const SESSIONS_TIMELINE: Label = Label::new("Sessions Timeline", "الجدول الزمني للجلسات");
pub const EVENT_TIMELINE: Label = Label::new("Event Timeline", "الجدول الزمني للحدث");
pub const TOTAL_SESSIONS: Label = Label::new("Total Sessions", "إجمالي الجلسات");
pub const EVENT_DAYS: Label = Label::new("Event Days", "أيام الحدث");
pub const FORMAT: Label = Label::new("Format", "الشكل");
pub const SESSION: Label = Label::new("Session", "الجلسة");
pub const NO_DATED_MILESTONES: Label =
    Label::new("No dated milestones", "لا توجد مواعيد مؤرخة");
pub const NO_CHART_DATA: Label = Label::new("Nothing to chart yet", "لا توجد بيانات للعرض");

// Timeline milestones
pub const MILESTONE_START: Label = Label::new("Starts", "البداية");
pub const MILESTONE_END: Label = Label::new("Ends", "النهاية");
pub const MILESTONE_NEWS: Label = Label::new("News", "خبر");
pub const MILESTONE_ARRIVAL: Label = Label::new("Arrival", "وصول");

// Agenda
pub const AGENDA_SUMMARY: Label = Label::new("Agenda Summary", "ملخص الأجندة");
pub const KEY_TOPICS: Label = Label::new("Key Topics", "المواضيع الرئيسية");
pub const EVENT_SCHEDULE: Label = Label::new("Event Schedule", "جدول الحدث");
pub const START_DATE: Label = Label::new("Start Date", "تاريخ البدء");
pub const END_DATE: Label = Label::new("End Date", "تاريخ الانتهاء");
pub const DAYS: Label = Label::new("days", "أيام");
pub const NO_AGENDA: Label = Label::new("No agenda published yet", "لم تنشر الأجندة بعد");

// Participants
pub const EVENT_PARTICIPANTS: Label = Label::new("Event Participants", "المشاركون في الحدث");
pub const TOTAL_PARTICIPANTS: Label = Label::new("Total Participants", "إجمالي المشاركين");
pub const SPONSORS: Label = Label::new("Sponsors", "الرعاة");
pub const INDUSTRIES: Label = Label::new("Industries", "القطاعات");
pub const WITH_PRODUCTS: Label = Label::new("With Products", "بمنتجات");
pub const COMPANY_PROFILE: Label = Label::new("Company Profile", "ملف الشركة");
pub const WHY_ATTEND: Label = Label::new("Why They Attend", "لماذا يحضرون");
pub const CONTRIBUTION: Label = Label::new("Their Contribution", "مساهمتهم");
pub const PRODUCTS: Label = Label::new("Products & Services", "المنتجات والخدمات");
pub const FULL_PROFILE: Label = Label::new("Full Profile", "الملف الكامل");
pub const NO_PARTICIPANTS: Label =
    Label::new("No participant details available", "لا توجد تفاصيل المشاركين متاحة");
pub const HEADQUARTERS: Label = Label::new("Headquarters", "المقر الرئيسي");
pub const FOUNDED: Label = Label::new("Founded", "تأسست");
pub const INDUSTRY: Label = Label::new("Industry", "الصناعة");
pub const CEO: Label = Label::new("CEO", "الرئيس التنفيذي");
pub const MORE: Label = Label::new("More", "المزيد");
pub const LESS: Label = Label::new("Less", "أقل");

// Speakers
pub const FEATURED_SPEAKERS: Label = Label::new("Featured Speakers", "المتحدثون المميزون");
pub const TOTAL_SPEAKERS: Label = Label::new("Total Speakers", "إجمالي المتحدثين");
pub const VIRTUAL: Label = Label::new("Virtual", "افتراضي");
pub const KEYNOTES: Label = Label::new("Keynotes", "جلسات رئيسية");
pub const COMPANIES: Label = Label::new("Companies", "شركات");
pub const NO_SPEAKERS: Label = Label::new("No Speakers Yet", "لا يوجد متحدثون بعد");
pub const NO_SPEAKERS_HINT: Label = Label::new(
    "Speaker details will be available soon.",
    "سيتم توفير تفاصيل المتحدثين قريبًا.",
);
pub const MINUTES: Label = Label::new("min", "دقيقة");
pub const AI_GENERATED: Label = Label::new("AI", "ذكاء");
pub const VIEW_PROFILE: Label = Label::new("View Full Profile", "عرض الملف الكامل");

// Organizations
pub const ORGANIZATIONS_AND_PARTNERS: Label =
    Label::new("Organizations & Partners", "المنظمات والشركاء");
pub const REPRESENTED_ORGANIZATIONS: Label =
    Label::new("Represented Organizations", "المنظمات الممثلة");
pub const STRATEGIC_PARTNERS: Label = Label::new("Strategic Partners", "الشركاء الاستراتيجيون");
pub const LEADING_PARTNERS: Label = Label::new("Leading Partners", "الشركاء الرائدون");
pub const NO_ORGANIZATIONS: Label = Label::new(
    "No organizations or partners information available",
    "لا توجد معلومات عن المنظمات أو الشركاء",
);

// Media
pub const MEDIA_AND_PRESS: Label = Label::new("Media & Press", "الوسائط والصحافة");
pub const MEDIA_PARTNERS: Label = Label::new("Media Partners", "شركاء الإعلام");
pub const NEWS_COVERAGE: Label = Label::new("News & Coverage", "الأخبار والتغطيات الصحفية");
pub const VISIT_PROFILE: Label = Label::new("Visit Profile", "زيارة الملف");
pub const READ_ARTICLE: Label = Label::new("Read Full Article", "قراءة المقال الكامل");
pub const NO_MEDIA: Label = Label::new("No media coverage yet", "لا توجد تغطية إعلامية بعد");

// Meta
pub const META_ADMIN: Label = Label::new("Meta & Admin Information", "المعلومات الإدارية");
pub const SOURCE_CREDIBILITY: Label = Label::new("Source Credibility", "مصداقية المصدر");
pub const LAST_UPDATED: Label = Label::new("Last Updated", "آخر تحديث");
pub const IMPACT_SCORE: Label = Label::new("Impact Score", "درجة التأثير");
pub const EXPECTED_ATTENDEES: Label = Label::new("Expected Attendees", "الحضور المتوقع");
pub const ATTENDANCE_DETAILS: Label = Label::new("Attendance Details", "تفاصيل الحضور");
pub const REGISTRATION_TYPE: Label = Label::new("Registration Type", "نوع التسجيل");
pub const CONTACT_EMAIL: Label = Label::new("Contact Email", "البريد الإلكتروني");
pub const REGISTRATION_URL: Label = Label::new("Registration URL", "رابط التسجيل");
pub const SOURCE_URL: Label = Label::new("Source URL", "رابط المصدر");
pub const SOCIAL_LINKS: Label = Label::new("Social Links", "روابط التواصل الاجتماعي");
pub const KEYWORDS_AND_TAGS: Label = Label::new("Keywords & Tags", "الكلمات المفتاحية والعلامات");

// Profiles
pub const BIOGRAPHY: Label = Label::new("Biography", "السيرة الذاتية");
pub const BACKGROUND: Label = Label::new("Background", "الخلفية");
pub const EDUCATION: Label = Label::new("Education", "التعليم");
pub const CAREER_HISTORY: Label = Label::new("Career History", "التاريخ المهني");
pub const CURRENT_ROLES: Label = Label::new("Current Roles", "الأدوار الحالية");
pub const PAST_ROLES: Label = Label::new("Past Roles", "الأدوار السابقة");
pub const BOARD_MEMBERSHIPS: Label = Label::new("Board Memberships", "عضويات المجالس");
pub const NOTABLE_ACHIEVEMENTS: Label = Label::new("Notable Achievements", "الإنجازات البارزة");
pub const SENIOR_TEAM: Label = Label::new("Senior Team Members", "كبار أعضاء الفريق");
pub const RECENT_NEWS: Label = Label::new("Recent News", "الأخبار الأخيرة");
pub const ARRIVAL: Label = Label::new("Arrival", "الوصول");
pub const CITY: Label = Label::new("City", "المدينة");
pub const SOURCES: Label = Label::new("Sources", "المصادر");
pub const EXPERTISE: Label = Label::new("Expertise", "الخبرات");
pub const COMPANY_POLICY: Label = Label::new("Company Policy", "سياسة الشركة");
pub const STOCK_INFORMATION: Label = Label::new("Stock Information", "معلومات الأسهم");
pub const TICKER: Label = Label::new("Ticker", "الرمز");
pub const PUBLICLY_TRADED: Label = Label::new("Publicly Traded", "متداول علنًا");
pub const YES: Label = Label::new("Yes", "نعم");
pub const NO: Label = Label::new("No", "لا");
pub const LEADERSHIP_TEAM: Label = Label::new("Leadership Team", "فريق القيادة");
pub const KEY_PARTNERS: Label = Label::new("Key Partners", "الشركاء الرئيسيون");
pub const MAJOR_INVESTORS: Label = Label::new("Major Investors", "المستثمرون الرئيسيون");
pub const LATEST_NEWS: Label = Label::new("Latest News", "آخر الأخبار");

// Import
pub const UPLOAD_EVENT_DATA: Label = Label::new("Import Event Data", "رفع بيانات الأحداث");
pub const IMPORT_PATH_PROMPT: Label =
    Label::new("Path to a .csv, .xlsx or .xls file", "مسار ملف ‎.csv أو ‎.xlsx أو ‎.xls");
pub const REQUIRED_COLUMNS: Label = Label::new(
    "Required columns: Event Name English, City English",
    "مطلوب حقول ملف الإكسل: الاسم باللغة الإنجليزية، المدينة باللغة الإنجليزية",
);
pub const PARSING: Label = Label::new("Reading spreadsheet…", "جارٍ قراءة الملف…");
pub const SAVING: Label = Label::new("Saving events…", "جارٍ حفظ الأحداث…");
pub const IMPORT_SUCCESS: Label = Label::new("Import successful!", "تم الاستيراد بنجاح!");
pub const IMPORT_FAILED: Label = Label::new("Import failed", "فشل الاستيراد");
pub const IMPORT_BUSY: Label =
    Label::new("An import is already running", "هناك عملية استيراد جارية بالفعل");
pub const NO_ROWS: Label = Label::new("No event rows found", "لم يتم العثور على صفوف أحداث");
pub const MISSING_COLUMNS: Label = Label::new("Missing columns", "أعمدة مفقودة");
pub const SKIPPED_ROWS: Label = Label::new("Skipped blank rows", "صفوف فارغة متجاهلة");
pub const NAME: Label = Label::new("Name", "الاسم");
pub const START: Label = Label::new("Start", "البداية");
pub const END: Label = Label::new("End", "النهاية");
pub const ROWS: Label = Label::new("rows", "صفوف");
pub const STORED: Label = Label::new("stored", "محفوظة");
pub const IMPORTED: Label = Label::new("imported", "مستوردة");
pub const NO_LINK: Label = Label::new("No link to open", "لا يوجد رابط لفتحه");
pub const NO_PROFILE: Label = Label::new("No enriched profile", "لا يوجد ملف مفصل");
