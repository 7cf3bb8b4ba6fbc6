/// GDPT 2018 curriculum keywords (competency and quality vocabulary).
/// All entries are lowercase; matching lowercases the content.
pub const GDPT_2018_KEYWORDS: &[&str] = &[
    "năng lực",
    "phẩm chất",
    "yêu cầu cần đạt",
    "tự chủ",
    "giao tiếp",
    "hợp tác",
    "giải quyết vấn đề",
    "sáng tạo",
];

/// CV 5512 lesson-plan structural components.
pub const CV_5512_COMPONENTS: &[&str] = &[
    "mục tiêu",
    "thiết bị dạy học",
    "học liệu",
    "tiến trình dạy học",
    "mở đầu",
    "hình thành kiến thức",
    "luyện tập",
    "vận dụng",
];

/// Professional pedagogical vocabulary.
pub const PEDAGOGICAL_TERMS: &[&str] = &[
    "phương pháp dạy học",
    "kỹ thuật dạy học",
    "đánh giá",
    "phân hóa",
    "tích hợp",
    "trải nghiệm",
    "dự án",
    "thảo luận nhóm",
    "sản phẩm học tập",
    "tổ chức thực hiện",
    "phản hồi",
    "tự học",
];

/// Both phrases must appear for the CV 5512 structure bonus.
pub const CV_5512_STRUCTURE_MARKERS: [&str; 2] = ["mục tiêu", "hoạt động"];

/// GDPT 2018 keywords that carry a canned improvement suggestion when missing.
pub const GDPT_2018_SUGGESTIONS: &[(&str, &str)] = &[
    (
        "năng lực",
        "Bổ sung mục tiêu phát triển năng lực cho học sinh (năng lực chung và năng lực đặc thù)",
    ),
    (
        "phẩm chất",
        "Nêu rõ các phẩm chất cần hình thành (yêu nước, nhân ái, chăm chỉ, trung thực, trách nhiệm)",
    ),
    (
        "yêu cầu cần đạt",
        "Đối chiếu nội dung với yêu cầu cần đạt của Chương trình GDPT 2018",
    ),
    (
        "giải quyết vấn đề",
        "Thiết kế tình huống để học sinh rèn luyện năng lực giải quyết vấn đề",
    ),
];

/// CV 5512 components that carry a canned improvement suggestion when missing.
pub const CV_5512_SUGGESTIONS: &[(&str, &str)] = &[
    (
        "mục tiêu",
        "Xác định rõ mục tiêu bài học về kiến thức, năng lực và phẩm chất",
    ),
    (
        "thiết bị dạy học",
        "Liệt kê thiết bị dạy học và học liệu cần chuẩn bị",
    ),
    (
        "tiến trình dạy học",
        "Trình bày tiến trình dạy học theo các hoạt động: mở đầu, hình thành kiến thức, luyện tập, vận dụng",
    ),
    (
        "luyện tập",
        "Bổ sung hoạt động luyện tập để củng cố kiến thức",
    ),
    (
        "vận dụng",
        "Bổ sung hoạt động vận dụng, gắn kiến thức với thực tiễn",
    ),
];

/// Emitted when content uses fewer than the required number of pedagogical terms.
pub const TERMINOLOGY_SUGGESTIONS: [&str; 2] = [
    "Sử dụng thêm thuật ngữ chuyên môn sư phạm (phương pháp dạy học, kỹ thuật dạy học, đánh giá...)",
    "Mô tả rõ cách tổ chức thực hiện và hình thức đánh giá trong từng hoạt động",
];

/// Recommendations for grades 6-7.
pub const YOUNGER_GRADE_TIPS: [&str; 2] = [
    "Sử dụng hình ảnh, ví dụ trực quan gần gũi với lứa tuổi học sinh lớp 6-7",
    "Chia nhỏ nhiệm vụ học tập, tăng cường trò chơi học tập và hoạt động nhóm nhỏ",
];

/// Recommendations for grades 8-9.
pub const OLDER_GRADE_TIPS: [&str; 2] = [
    "Tăng cường câu hỏi phân tích, đánh giá để phát triển tư duy phản biện",
    "Giao nhiệm vụ tự nghiên cứu để học sinh lớp 8-9 phát huy tính tự chủ",
];

pub const STEM_TIPS: [&str; 2] = [
    "Kết hợp lý thuyết với thực hành, thí nghiệm hoặc mô hình trực quan",
    "Đưa bài toán thực tế để học sinh áp dụng kiến thức đã học",
];

pub const HUMANITIES_TIPS: [&str; 2] = [
    "Khuyến khích thảo luận, trao đổi ý kiến giữa các học sinh",
    "Liên hệ nội dung bài học với đời sống thực tế",
];

pub const OTHER_SUBJECT_TIPS: [&str; 1] =
    ["Tạo cơ hội để học sinh thể hiện bản thân qua hoạt động thực tế"];

/// Engine version reported by the JSON API.
pub const ENGINE_VERSION: &str = "0.3.0";
