//! Order operations.

use crate::gateway::Operation;

pub(crate) const CREATE_ORDER: Operation = Operation {
    field: "createOrder",
    document: r"
mutation CreateOrder($input: CreateOrderInput!) {
    createOrder(input: $input) {
        userId
        quantity
        totalPrice
        status
        createdAt
        products {
            id
            name
        }
    }
}
",
};

pub(crate) const ORDERS_BY_USER: Operation = Operation {
    field: "ordersByUser",
    document: r"
query GetOrdersForUser($id: ID!) {
    ordersByUser(userId: $id) {
        id
        userId
        quantity
        totalPrice
        status
        createdAt
        products {
            id
            name
        }
    }
}
",
};

pub(crate) const ORDERS: Operation = Operation {
    field: "orders",
    document: r"
query GetOrders {
    orders {
        id
        userId
        quantity
        totalPrice
        status
        createdAt
        products {
            id
            name
        }
    }
}
",
};

pub(crate) const ORDER: Operation = Operation {
    field: "order",
    document: r"
query GetOrder($id: ID!) {
    order(id: $id) {
        id
        userId
        quantity
        totalPrice
        status
        createdAt
        products {
            id
            name
        }
    }
}
",
};

pub(crate) const UPDATE_ORDER: Operation = Operation {
    field: "updateOrder",
    document: r"
mutation UpdateOrder($input: UpdateOrderInput!) {
    updateOrder(input: $input) {
        id
        userId
        quantity
        totalPrice
        status
        createdAt
        products {
            id
            name
        }
    }
}
",
};

pub(crate) const DELETE_ORDER: Operation = Operation {
    field: "deleteOrder",
    document: r"
mutation DeleteOrder($input: DeleteOrderInput!) {
    deleteOrder(input: $input)
}
",
};

pub(crate) const SET_ORDER_STATUS: Operation = Operation {
    field: "setOrderStatus",
    document: r"
mutation SetOrderStatus($input: SetOrderStatusInput!) {
    setOrderStatus(input: $input) {
        id
        userId
        quantity
        totalPrice
        status
        createdAt
        products {
            id
            name
        }
    }
}
",
};

pub(crate) const CHANGE_ORDER_QUANTITY: Operation = Operation {
    field: "changeOrderQuantity",
    document: r"
mutation ChangeOrderQuantity($input: ChangeOrderQuantityInput!) {
    changeOrderQuantity(input: $input) {
        id
        userId
        quantity
        totalPrice
        status
        createdAt
        products {
            id
            name
        }
    }
}
",
};
