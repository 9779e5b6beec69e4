/// 이메일로 사용자 조회
pub const GET_USER_BY_EMAIL: &str =
    "SELECT id, email, first_name, last_name, password_hash, role, org_id, created_at FROM users WHERE email = $1";

/// id로 사용자 조회
pub const GET_USER_BY_ID: &str =
    "SELECT id, email, first_name, last_name, password_hash, role, org_id, created_at FROM users WHERE id = $1";

/// 사용자 생성 (bidder 역할)
pub const INSERT_USER: &str = r#"
    INSERT INTO users (email, first_name, last_name, password_hash, role)
    VALUES ($1, $2, $3, $4, 'bidder')
    RETURNING id, email, first_name, last_name, password_hash, role, org_id, created_at
"#;

/// 진행 중인 경매 목록 조회 (단체명, 출품 수 포함)
pub const GET_ACTIVE_AUCTIONS: &str = r#"
    SELECT a.id, a.org_id, o.name AS organization, a.name, a.description, a.ends_at, a.status,
           COUNT(i.id) AS item_count
    FROM auctions a
    JOIN organizations o ON o.id = a.org_id
    LEFT JOIN auction_items i ON i.auction_id = a.id
    WHERE a.status = 'active'
    GROUP BY a.id, o.name
    ORDER BY a.ends_at ASC
"#;

/// 경매 조회
pub const GET_AUCTION: &str =
    "SELECT id, org_id, name, description, ends_at, status, created_at, updated_at FROM auctions WHERE id = $1";

/// 단체 조회
pub const GET_ORGANIZATION: &str =
    "SELECT id, name, description, logo_url, created_at FROM organizations WHERE id = $1";

/// 단체의 경매 목록 조회
pub const GET_AUCTIONS_BY_ORG: &str = r#"
    SELECT id, org_id, name, description, ends_at, status, created_at, updated_at
    FROM auctions
    WHERE org_id = $1
    ORDER BY created_at DESC
"#;

/// 경매의 상품 목록 조회
/// current_bid = COALESCE(MAX(입찰가), 시작가), bids_count = 입찰 수 (읽기 시점 집계)
pub const GET_AUCTION_ITEMS: &str = r#"
    SELECT i.id, i.auction_id, i.title, i.description, i.image_url, i.starting_bid,
           COALESCE(MAX(b.amount), i.starting_bid) AS current_bid,
           COUNT(b.id) AS bids_count,
           i.created_at, i.updated_at
    FROM auction_items i
    LEFT JOIN bids b ON b.item_id = i.id
    WHERE i.auction_id = $1
    GROUP BY i.id
    ORDER BY i.created_at ASC
"#;

/// 단체 전체 상품 목록 조회 (대시보드용, 동일한 파생 집계)
pub const GET_ORG_ITEMS: &str = r#"
    SELECT i.id, i.auction_id, i.title, i.description, i.image_url, i.starting_bid,
           COALESCE(MAX(b.amount), i.starting_bid) AS current_bid,
           COUNT(b.id) AS bids_count,
           i.created_at, i.updated_at
    FROM auction_items i
    JOIN auctions a ON a.id = i.auction_id
    LEFT JOIN bids b ON b.item_id = i.id
    WHERE a.org_id = $1
    GROUP BY i.id
    ORDER BY i.created_at ASC
"#;

/// 상품 조회
pub const GET_ITEM: &str = r#"
    SELECT i.id, i.auction_id, i.title, i.description, i.image_url, i.starting_bid,
           COALESCE(MAX(b.amount), i.starting_bid) AS current_bid,
           COUNT(b.id) AS bids_count,
           i.created_at, i.updated_at
    FROM auction_items i
    LEFT JOIN bids b ON b.item_id = i.id
    WHERE i.id = $1
    GROUP BY i.id
"#;

/// 상품 입찰 이력 조회 (입찰자 표시 이름 포함, 최신순)
pub const GET_ITEM_BIDS: &str = r#"
    SELECT b.id, b.item_id, b.user_id,
           u.first_name || ' ' || u.last_name AS bidder_name,
           b.amount, b.created_at
    FROM bids b
    JOIN users u ON u.id = b.user_id
    WHERE b.item_id = $1
    ORDER BY b.created_at DESC, b.id DESC
"#;

/// 단체 전체 입찰 이력 조회 (대시보드용)
pub const GET_ORG_BIDS: &str = r#"
    SELECT b.id, b.item_id, b.user_id,
           u.first_name || ' ' || u.last_name AS bidder_name,
           b.amount, b.created_at
    FROM bids b
    JOIN users u ON u.id = b.user_id
    JOIN auction_items i ON i.id = b.item_id
    JOIN auctions a ON a.id = i.auction_id
    WHERE a.org_id = $1
    ORDER BY b.created_at DESC, b.id DESC
"#;

/// 입찰 대상 상품 행 잠금 (경매 상태/종료 시각 포함)
pub const LOCK_ITEM_FOR_BID: &str = r#"
    SELECT i.id, i.starting_bid, a.status, a.ends_at
    FROM auction_items i
    JOIN auctions a ON a.id = i.auction_id
    WHERE i.id = $1
    FOR UPDATE OF i
"#;

/// 최고 입찰가 조회
pub const GET_HIGHEST_BID: &str =
    "SELECT MAX(amount) AS highest_bid FROM bids WHERE item_id = $1";

/// 입찰 행 삽입
pub const INSERT_BID: &str = r#"
    INSERT INTO bids (item_id, user_id, amount)
    VALUES ($1, $2, $3)
    RETURNING id, item_id, user_id, amount, created_at
"#;

/// 경매 생성 (draft 상태)
pub const INSERT_AUCTION: &str = r#"
    INSERT INTO auctions (org_id, name, description, ends_at, status)
    VALUES ($1, $2, $3, $4, 'draft')
    RETURNING id, org_id, name, description, ends_at, status, created_at, updated_at
"#;

/// 상품 등록
pub const INSERT_ITEM: &str = r#"
    INSERT INTO auction_items (auction_id, title, description, image_url, starting_bid)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, auction_id, title, description, image_url, starting_bid, created_at, updated_at
"#;

/// 단체 소속 경매 조회 (소유권 검증용)
pub const GET_AUCTION_FOR_ORG: &str =
    "SELECT id FROM auctions WHERE id = $1 AND org_id = $2";

/// 경매 개시 (draft -> active)
pub const ACTIVATE_AUCTION: &str = r#"
    UPDATE auctions SET status = 'active', updated_at = now()
    WHERE id = $1 AND org_id = $2 AND status = 'draft'
    RETURNING id, org_id, name, description, ends_at, status, created_at, updated_at
"#;
