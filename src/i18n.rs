//! Display strings for the supported languages

use serde::{Deserialize, Serialize};

/// Display language, also sent to the backend as the `language` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh")]
    Zh,
    #[serde(rename = "en")]
    En,
}

impl Language {
    /// Wire tag for this language
    pub fn tag(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Parse a language tag, tolerating case and region suffixes (`en-US`, `zh_CN`)
    pub fn parse(value: &str) -> Option<Self> {
        let primary = value
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Some(Self::Zh),
            "en" => Some(Self::En),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }

    /// Label of the toggle button: names the language you would switch to
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Zh => "EN",
            Self::En => "中文",
        }
    }
}

/// Flat table of display strings for one language
#[derive(Debug)]
pub struct Translations {
    pub logo: &'static str,
    pub badge: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,

    pub step: &'static str,
    pub step1_title: &'static str,
    pub step1_placeholder: &'static str,
    pub step2_title: &'static str,
    pub step2_placeholder: &'static str,
    pub step3_title: &'static str,
    pub step4_title: &'static str,
    pub step5_title: &'static str,
    pub step5_placeholder: &'static str,

    pub electronics: &'static str,
    pub food_beverage: &'static str,
    pub cosmetics: &'static str,
    pub textiles: &'static str,
    pub machinery: &'static str,
    pub other: &'static str,

    pub usa: &'static str,
    pub eu: &'static str,
    pub japan: &'static str,
    pub korea: &'static str,
    pub australia: &'static str,
    pub southeast_asia: &'static str,
    pub middle_east: &'static str,

    pub prev_step: &'static str,
    pub next_step: &'static str,
    pub generating: &'static str,
    pub generate_doc: &'static str,

    pub network_error: &'static str,
    pub empty_response: &'static str,
    pub generate_failed: &'static str,

    pub result_title: &'static str,
    pub required_certs: &'static str,
    pub compliance_checklist: &'static str,
    pub required: &'static str,
    pub estimate_info: &'static str,
    pub estimated_time: &'static str,
    pub estimated_cost: &'static str,
    pub regulation_details: &'static str,
    pub country: &'static str,
    pub main_regulations: &'static str,
    pub customs_requirements: &'static str,
    pub import_restrictions: &'static str,
    pub recommended_steps: &'static str,
    pub generated_at: &'static str,

    pub copy_doc: &'static str,
    pub download_doc: &'static str,
    pub regenerate: &'static str,
    pub copied: &'static str,
    pub downloaded_to: &'static str,
    pub download_suffix: &'static str,

    pub hint_text_step: &'static str,
    pub hint_choice_step: &'static str,
    pub hint_description_step: &'static str,
    pub hint_result: &'static str,
    pub hint_dismiss: &'static str,
    pub error_title: &'static str,

    pub footer: &'static str,
}

static ZH: Translations = Translations {
    logo: "出口文件生成器",
    badge: "AI 智能文档生成平台",
    hero_title: "一键生成符合出口国标准的产品文件",
    hero_subtitle: "帮助企业快速生成符合目标国家法规要求的产品审核文件，简化出口流程，节省时间成本",

    step: "步骤",
    step1_title: "1. 您的公司名称是什么？",
    step1_placeholder: "请输入公司名称...",
    step2_title: "2. 您要出口的产品名称？",
    step2_placeholder: "请输入产品名称...",
    step3_title: "3. 产品类别是什么？",
    step4_title: "4. 目标出口国家/地区？",
    step5_title: "5. 请简要描述您的产品",
    step5_placeholder: "请输入产品详细描述、特性、用途等...",

    electronics: "电子产品",
    food_beverage: "食品饮料",
    cosmetics: "化妆品",
    textiles: "纺织品",
    machinery: "机械设备",
    other: "其他",

    usa: "美国",
    eu: "欧盟",
    japan: "日本",
    korea: "韩国",
    australia: "澳大利亚",
    southeast_asia: "东南亚",
    middle_east: "中东",

    prev_step: "← 上一步",
    next_step: "下一步 →",
    generating: "生成中...",
    generate_doc: "生成文件 ✓",

    network_error: "网络错误，请检查后端服务是否正常运行",
    empty_response: "服务器返回空响应，请检查后端日志",
    generate_failed: "生成文档失败",

    result_title: "生成的出口文件",
    required_certs: "📋 所需认证文件",
    compliance_checklist: "✅ 合规项目清单",
    required: "必需",
    estimate_info: "📅 预计时间与费用",
    estimated_time: "预计时间：",
    estimated_cost: "预计费用：",
    regulation_details: "🔍 法规详情",
    country: "国家/地区：",
    main_regulations: "主要法规：",
    customs_requirements: "海关要求：",
    import_restrictions: "进口限制：",
    recommended_steps: "📝 推荐步骤",
    generated_at: "生成时间：",

    copy_doc: "复制文件",
    download_doc: "下载文件",
    regenerate: "重新生成",
    copied: "已复制到剪贴板",
    downloaded_to: "已保存到 ",
    download_suffix: "出口文件",

    hint_text_step: "Enter: 下一步  Esc: 上一步  F2: 切换语言  Ctrl+C: 退出",
    hint_choice_step: "↑/↓: 选择  Enter: 确认  →: 下一步  Esc: 上一步",
    hint_description_step: "Ctrl+S: 生成文件  Enter: 换行  Esc: 上一步",
    hint_result: "c: 复制  d: 下载  r: 重新生成  ↑/↓: 滚动  q: 退出",
    hint_dismiss: "按 Enter 或 Esc 关闭",
    error_title: "错误",

    footer: "© 2025 出口文件生成器. 帮助企业简化出口流程",
};

static EN: Translations = Translations {
    logo: "Export Doc Generator",
    badge: "AI-Powered Document Generation Platform",
    hero_title: "Generate Export-Compliant Product Documents Instantly",
    hero_subtitle: "Help businesses quickly generate product certification documents that meet target country regulatory requirements, simplifying export processes and saving time",

    step: "Step",
    step1_title: "1. What is your company name?",
    step1_placeholder: "Enter company name...",
    step2_title: "2. What is your product name?",
    step2_placeholder: "Enter product name...",
    step3_title: "3. What is your product category?",
    step4_title: "4. Target export country/region?",
    step5_title: "5. Please describe your product briefly",
    step5_placeholder: "Enter detailed product description, features, uses, etc...",

    electronics: "Electronics",
    food_beverage: "Food & Beverage",
    cosmetics: "Cosmetics",
    textiles: "Textiles",
    machinery: "Machinery",
    other: "Other",

    usa: "United States",
    eu: "European Union",
    japan: "Japan",
    korea: "South Korea",
    australia: "Australia",
    southeast_asia: "Southeast Asia",
    middle_east: "Middle East",

    prev_step: "← Previous",
    next_step: "Next →",
    generating: "Generating...",
    generate_doc: "Generate Document ✓",

    network_error: "Network error, please check if backend service is running",
    empty_response: "Server returned empty response, please check backend logs",
    generate_failed: "Failed to generate document",

    result_title: "Generated Export Document",
    required_certs: "📋 Required Certifications",
    compliance_checklist: "✅ Compliance Checklist",
    required: "Required",
    estimate_info: "📅 Estimated Time & Cost",
    estimated_time: "Estimated Time: ",
    estimated_cost: "Estimated Cost: ",
    regulation_details: "🔍 Regulation Details",
    country: "Country/Region: ",
    main_regulations: "Main Regulations: ",
    customs_requirements: "Customs Requirements: ",
    import_restrictions: "Import Restrictions: ",
    recommended_steps: "📝 Recommended Steps",
    generated_at: "Generated at: ",

    copy_doc: "Copy Document",
    download_doc: "Download Document",
    regenerate: "Regenerate",
    copied: "Copied to clipboard",
    downloaded_to: "Saved to ",
    download_suffix: "export-document",

    hint_text_step: "Enter: next  Esc: back  F2: language  Ctrl+C: quit",
    hint_choice_step: "↑/↓: choose  Enter: select  →: next  Esc: back",
    hint_description_step: "Ctrl+S: generate  Enter: newline  Esc: back",
    hint_result: "c: copy  d: download  r: regenerate  ↑/↓: scroll  q: quit",
    hint_dismiss: "Press Enter or Esc to dismiss",
    error_title: "Error",

    footer: "© 2025 Export Doc Generator. Simplifying export processes for businesses",
};

/// Get the string table for a language
pub fn tr(language: Language) -> &'static Translations {
    match language {
        Language::Zh => &ZH,
        Language::En => &EN,
    }
}
