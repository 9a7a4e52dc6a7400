//! Product operations.

use crate::gateway::Operation;

pub(crate) const PRODUCTS_CURSOR: Operation = Operation {
    field: "productsCursor",
    document: r"
query GetProductsCursor($after: String, $first: Int) {
    productsCursor(after: $after, first: $first) {
        edges {
            cursor
            node {
                id
                name
                price
                description
                inventory
                available
            }
        }
        pageInfo {
            hasNextPage
            endCursor
        }
        totalCount
    }
}
",
};

pub(crate) const PRODUCT: Operation = Operation {
    field: "product",
    document: r"
query GetProduct($id: ID!) {
    product(id: $id) {
        id
        name
        price
        description
        inventory
        available
    }
}
",
};

pub(crate) const CREATE_PRODUCT: Operation = Operation {
    field: "createProduct",
    document: r"
mutation CreateProduct($input: CreateProductInput!) {
    createProduct(input: $input) {
        id
        name
        price
        description
        inventory
        available
    }
}
",
};

pub(crate) const UPDATE_PRODUCT: Operation = Operation {
    field: "updateProduct",
    document: r"
mutation UpdateProduct($id: ID!, $input: UpdateProductInput!) {
    updateProduct(id: $id, input: $input) {
        id
        name
        price
        description
        inventory
        available
    }
}
",
};

pub(crate) const DELETE_PRODUCT: Operation = Operation {
    field: "deleteProduct",
    document: r"
mutation DeleteProduct($input: DeleteProductInput!) {
    deleteProduct(input: $input)
}
",
};

pub(crate) const RESTOCK_PRODUCT: Operation = Operation {
    field: "restockProduct",
    document: r"
mutation RestockProduct($input: RestockProductInput!) {
    restockProduct(input: $input) {
        id
        name
        price
        description
        inventory
        available
    }
}
",
};

pub(crate) const SET_PRODUCT_AVAILABILITY: Operation = Operation {
    field: "setProductAvailability",
    document: r"
mutation SetProductAvailability($input: SetProductAvailabilityInput!) {
    setProductAvailability(input: $input) {
        id
        name
        price
        description
        inventory
        available
    }
}
",
};
