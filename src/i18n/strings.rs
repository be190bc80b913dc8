//! The translation table.
//!
//! Every entry names a `TranslationKey` variant, its dotted string key, and one
//! string per supported language. The `en:` and `hi:` fields are both required
//! by the macro, so a partial entry does not compile.

use crate::i18n::Language;

/// One row of the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: TranslationKey,
    pub english: &'static str,
    pub hindi: &'static str,
}

impl TranslationEntry {
    /// The string recorded for `language`.
    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::Hindi => self.hindi,
        }
    }
}

macro_rules! translations {
    ($( $variant:ident => $key:literal { en: $en:literal, hi: $hi:literal $(,)? } ),* $(,)?) => {
        /// Statically known translation keys.
        ///
        /// Use these at call sites that know their key at compile time; string
        /// keys built at runtime go through `TranslationStore::get`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TranslationKey {
            $( $variant, )*
        }

        impl TranslationKey {
            /// Every key, in table order.
            pub const ALL: &'static [TranslationKey] = &[ $( TranslationKey::$variant, )* ];

            /// The dotted string form of the key (e.g. `"common.loading"`).
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( TranslationKey::$variant => $key, )*
                }
            }

            /// The table row for this key.
            pub fn entry(self) -> &'static TranslationEntry {
                // ENTRIES is generated in declaration order, so the discriminant is the row index.
                &ENTRIES[self as usize]
            }
        }

        /// All translation entries, in declaration order.
        pub const ENTRIES: &[TranslationEntry] = &[
            $( TranslationEntry { key: TranslationKey::$variant, english: $en, hindi: $hi }, )*
        ];
    };
}

impl std::fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

translations! {
    // ==================== Hero Section ====================
    HeroTitle => "hero.title" {
        en: "Empowering Citizens,",
        hi: "नागरिकों को सशक्त बनाना,",
    },
    HeroSubtitle => "hero.subtitle" {
        en: "Digitally 🇮🇳",
        hi: "डिजिटली 🇮🇳",
    },
    HeroDescription => "hero.description" {
        en: "Access all government services seamlessly from one unified platform. Fast, secure, and available 24/7.",
        hi: "एक एकीकृत प्लेटफॉर्म से सभी सरकारी सेवाओं तक निर्बाध रूप से पहुंचें। तेज़, सुरक्षित और 24/7 उपलब्ध।",
    },
    HeroGetStarted => "hero.getStarted" {
        en: "Get Started",
        hi: "शुरू करें",
    },
    HeroSignIn => "hero.signIn" {
        en: "Sign In",
        hi: "साइन इन",
    },

    // ==================== Stats ====================
    StatsActiveUsers => "stats.activeUsers" {
        en: "Active Users",
        hi: "सक्रिय उपयोगकर्ता",
    },
    StatsUptime => "stats.uptime" {
        en: "Uptime",
        hi: "अपटाइम",
    },
    StatsSupport => "stats.support" {
        en: "Support",
        hi: "सहायता",
    },
    StatsServices => "stats.services" {
        en: "Services",
        hi: "सेवाएं",
    },

    // ==================== Features Section ====================
    FeaturesTitle => "features.title" {
        en: "Comprehensive Services",
        hi: "व्यापक सेवाएं",
    },
    FeaturesSubtitle => "features.subtitle" {
        en: "Everything you need to interact with government services, all in one place",
        hi: "सरकारी सेवाओं के साथ बातचीत करने के लिए आपको जो कुछ भी चाहिए, सब एक ही जगह",
    },
    FeaturesBillPayments => "features.billPayments" {
        en: "Bill Payments",
        hi: "बिल भुगतान",
    },
    FeaturesBillPaymentsDesc => "features.billPaymentsDesc" {
        en: "Pay electricity, water, and gas bills instantly with secure transactions",
        hi: "सुरक्षित लेनदेन के साथ बिजली, पानी और गैस के बिल तुरंत भुगतान करें",
    },
    FeaturesDocuments => "features.documents" {
        en: "Official Documents",
        hi: "आधिकारिक दस्तावेज़",
    },
    FeaturesDocumentsDesc => "features.documentsDesc" {
        en: "Request and download verified government documents quickly",
        hi: "सत्यापित सरकारी दस्तावेज़ तेज़ी से अनुरोध और डाउनलोड करें",
    },
    FeaturesGrievances => "features.grievances" {
        en: "Grievance Portal",
        hi: "शिकायत पोर्टल",
    },
    FeaturesGrievancesDesc => "features.grievancesDesc" {
        en: "Submit complaints and track resolution status in real-time",
        hi: "शिकायतें दर्ज करें और रियल-टाइम में समाधान की स्थिति को ट्रैक करें",
    },
    FeaturesSecurity => "features.security" {
        en: "Secure Authentication",
        hi: "सुरक्षित प्रमाणीकरण",
    },
    FeaturesSecurityDesc => "features.securityDesc" {
        en: "Bank-grade security with encrypted data protection",
        hi: "एन्क्रिप्टेड डेटा सुरक्षा के साथ बैंक-ग्रेड सुरक्षा",
    },

    // ==================== Benefits Section ====================
    BenefitsTitle => "benefits.title" {
        en: "Why Choose Our Portal?",
        hi: "हमारा पोर्टल क्यों चुनें?",
    },
    BenefitsBenefit1 => "benefits.benefit1" {
        en: "Instant access to 50+ government services",
        hi: "50+ सरकारी सेवाओं तक त्वरित पहुंच",
    },
    BenefitsBenefit2 => "benefits.benefit2" {
        en: "Secure payments with transaction history",
        hi: "लेनदेन इतिहास के साथ सुरक्षित भुगतान",
    },
    BenefitsBenefit3 => "benefits.benefit3" {
        en: "Real-time grievance tracking",
        hi: "रियल-टाइम शिकायत ट्रैकिंग",
    },
    BenefitsBenefit4 => "benefits.benefit4" {
        en: "AI-powered assistance 24/7",
        hi: "AI-संचालित सहायता 24/7",
    },
    BenefitsBenefit5 => "benefits.benefit5" {
        en: "Mobile-friendly responsive design",
        hi: "मोबाइल-फ्रेंडली रिस्पॉन्सिव डिज़ाइन",
    },
    BenefitsCta => "benefits.cta" {
        en: "Start Using Portal",
        hi: "पोर्टल का उपयोग शुरू करें",
    },
    BenefitsFast => "benefits.fast" {
        en: "Lightning Fast",
        hi: "बिजली की तेजी",
    },
    BenefitsFastDesc => "benefits.fastDesc" {
        en: "Services load in under 2 seconds",
        hi: "सेवाएं 2 सेकंड से कम समय में लोड होती हैं",
    },
    BenefitsSecurityTitle => "benefits.securityTitle" {
        en: "Bank-Grade Security",
        hi: "बैंक-ग्रेड सुरक्षा",
    },
    BenefitsSecurityDesc => "benefits.securityDesc" {
        en: "256-bit encryption for all data",
        hi: "सभी डेटा के लिए 256-बिट एन्क्रिप्शन",
    },
    BenefitsTrusted => "benefits.trusted" {
        en: "Trusted by Millions",
        hi: "लाखों द्वारा विश्वसनीय",
    },
    BenefitsTrustedDesc => "benefits.trustedDesc" {
        en: "10M+ active users nationwide",
        hi: "10M+ सक्रिय उपयोगकर्ता देशव्यापी",
    },

    // ==================== CTA Section ====================
    CtaTitle => "cta.title" {
        en: "Ready to Get Started?",
        hi: "शुरू करने के लिए तैयार हैं?",
    },
    CtaDescription => "cta.description" {
        en: "Join millions of citizens accessing government services digitally",
        hi: "डिजिटल रूप से सरकारी सेवाओं तक पहुंचने वाले लाखों नागरिकों में शामिल हों",
    },
    CtaButton => "cta.button" {
        en: "Create Account Now",
        hi: "अभी खाता बनाएं",
    },

    // ==================== Footer ====================
    FooterCopyright => "footer.copyright" {
        en: "© 2025 Unified Citizen Service Portal. All rights reserved.",
        hi: "© 2025 एकीकृत नागरिक सेवा पोर्टल। सर्वाधिकार सुरक्षित।",
    },
    FooterInitiative => "footer.initiative" {
        en: "A Digital India Initiative",
        hi: "एक डिजिटल इंडिया पहल",
    },

    // ==================== Auth Page ====================
    AuthBackHome => "auth.backHome" {
        en: "Back to Home",
        hi: "होम पर वापस जाएं",
    },
    AuthSecureAccess => "auth.secureAccess" {
        en: "Secure Access",
        hi: "सुरक्षित पहुंच",
    },
    AuthSubtitle => "auth.subtitle" {
        en: "Sign in to access government services",
        hi: "सरकारी सेवाओं तक पहुंचने के लिए साइन इन करें",
    },
    AuthSignIn => "auth.signIn" {
        en: "Sign In",
        hi: "साइन इन",
    },
    AuthSignUp => "auth.signUp" {
        en: "Sign Up",
        hi: "साइन अप",
    },
    AuthEmail => "auth.email" {
        en: "Email",
        hi: "ईमेल",
    },
    AuthPassword => "auth.password" {
        en: "Password",
        hi: "पासवर्ड",
    },
    AuthFullName => "auth.fullName" {
        en: "Full Name",
        hi: "पूरा नाम",
    },
    AuthSigningIn => "auth.signingIn" {
        en: "Signing in...",
        hi: "साइन इन हो रहा है...",
    },
    AuthCreatingAccount => "auth.creatingAccount" {
        en: "Creating Account...",
        hi: "खाता बनाया जा रहा है...",
    },
    AuthCreateAccount => "auth.createAccount" {
        en: "Create Account",
        hi: "खाता बनाएं",
    },
    AuthMinChars => "auth.minChars" {
        en: "Minimum 6 characters",
        hi: "न्यूनतम 6 अक्षर",
    },
    AuthSecurity => "auth.security" {
        en: "🔒 Your data is protected with bank-grade encryption",
        hi: "🔒 आपका डेटा बैंक-ग्रेड एन्क्रिप्शन से सुरक्षित है",
    },

    // ==================== Dashboard ====================
    DashboardWelcome => "dashboard.welcome" {
        en: "Welcome back",
        hi: "वापसी पर स्वागत है",
    },
    DashboardCitizen => "dashboard.citizen" {
        en: "Citizen",
        hi: "नागरिक",
    },
    DashboardSubtitle => "dashboard.subtitle" {
        en: "Access all your government services from one place",
        hi: "एक स्थान से अपनी सभी सरकारी सेवाओं तक पहुंचें",
    },
    DashboardLogout => "dashboard.logout" {
        en: "Logout",
        hi: "लॉगआउट",
    },
    DashboardQuickAccess => "dashboard.quickAccess" {
        en: "Quick Access",
        hi: "त्वरित पहुंच",
    },
    DashboardPendingBills => "dashboard.pendingBills" {
        en: "Pending Bills",
        hi: "लंबित बिल",
    },
    DashboardDocumentsRequested => "dashboard.documentsRequested" {
        en: "Documents Requested",
        hi: "अनुरोधित दस्तावेज़",
    },
    DashboardActiveGrievances => "dashboard.activeGrievances" {
        en: "Active Grievances",
        hi: "सक्रिय शिकायतें",
    },
    DashboardRecentActivity => "dashboard.recentActivity" {
        en: "Recent Activity",
        hi: "हाल की गतिविधि",
    },
    DashboardNoActivity => "dashboard.noActivity" {
        en: "No recent activity",
        hi: "कोई हालिया गतिविधि नहीं",
    },
    DashboardActivityDesc => "dashboard.activityDesc" {
        en: "Your recent transactions will appear here",
        hi: "आपके हाल के लेनदेन यहां दिखाई देंगे",
    },
    DashboardAccessService => "dashboard.accessService" {
        en: "Access Service",
        hi: "सेवा का उपयोग करें",
    },
    DashboardPayNow => "dashboard.payNow" {
        en: "Pay Now",
        hi: "अभी भुगतान करें",
    },
    DashboardViewDetails => "dashboard.viewDetails" {
        en: "View Details",
        hi: "विवरण देखें",
    },
    DashboardTrackStatus => "dashboard.trackStatus" {
        en: "Track Status",
        hi: "स्थिति ट्रैक करें",
    },

    // ==================== Common ====================
    CommonLoading => "common.loading" {
        en: "Loading...",
        hi: "लोड हो रहा है...",
    },
    CommonSewabandhu => "common.sewabandhu" {
        en: "eSahayata",
        hi: "ई-सहायता",
    },
    CommonGovIndia => "common.govIndia" {
        en: "Government of India",
        hi: "भारत सरकार",
    },
}
